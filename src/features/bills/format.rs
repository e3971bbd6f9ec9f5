/// 経費の表示用フォーマット
use super::models::{Bill, BillStatus, DisplayBill};
use crate::shared::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use log::warn;

/// 月の短縮表記（フランス語、先頭大文字・3文字）
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// YYYY-MM-DD形式の日付を表示用の長い形式に変換する
///
/// `"2004-04-04"` → `"4 Avr. 04"`
///
/// # エラー
/// 日付として解釈できない場合はバリデーションエラー
pub fn format_date(date_str: &str) -> AppResult<String> {
    let date = NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|e| AppError::validation(format!("無効な日付です: {date_str} ({e})")))?;

    let month = MONTH_ABBREVIATIONS[date.month0() as usize];
    let year = date.year().to_string();
    let short_year: String = year.chars().skip(2).collect();

    Ok(format!("{} {month}. {short_year}", date.day()))
}

/// ステータスを表示ラベルに変換する
pub fn format_status(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Accepté",
        BillStatus::Refused => "Refused",
        BillStatus::Unknown => "Inconnu",
    }
}

impl DisplayBill {
    /// 経費データと表示用の日付から表示用データを組み立てる
    ///
    /// ステータスは常に表示ラベルに変換される
    pub fn with_date(bill: &Bill, date: String) -> Self {
        Self {
            id: bill.id.clone(),
            email: bill.email.clone(),
            expense_type: bill.expense_type.clone(),
            name: bill.name.clone(),
            amount: bill.amount,
            date,
            vat: bill.vat.clone(),
            pct: bill.pct,
            commentary: bill.commentary.clone(),
            file_url: bill.file_url.clone(),
            file_name: bill.file_name.clone(),
            status: format_status(bill.status).to_string(),
            comment_admin: bill.comment_admin.clone(),
        }
    }

    /// 日付とステータスの両方をフォーマットする
    ///
    /// # エラー
    /// 日付が不正な場合
    pub fn try_from_bill(bill: &Bill) -> AppResult<Self> {
        let date = format_date(&bill.date)?;
        Ok(Self::with_date(bill, date))
    }

    /// 日付のフォーマットに失敗した場合は元の日付を残して表示用データを作成する
    ///
    /// 失敗はログに記録し、ユーザーには通知しない
    pub fn from_bill(bill: &Bill) -> Self {
        match Self::try_from_bill(bill) {
            Ok(display) => display,
            Err(e) => {
                warn!("日付のフォーマットに失敗しました: {e} for {bill:?}");
                Self::with_date(bill, bill.date.clone())
            }
        }
    }
}
