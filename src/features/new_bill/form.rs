//! 新規経費フォームの入力値と送信データの組み立て

use super::receipt::StagedReceipt;
use crate::features::bills::models::{Bill, BillStatus, DEFAULT_PCT};
use crate::shared::utils::parse_int_prefix;

/// フォームの入力値（すべて入力欄の生の文字列）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBillForm {
    /// 経費の種類（選択欄の値）
    pub expense_type: String,
    pub name: String,
    pub amount: String,
    /// YYYY-MM-DD形式
    pub date: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

/// フォームの送信イベント
#[derive(Debug, Clone, Default)]
pub struct SubmitEvent {
    pub form: NewBillForm,
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new(form: NewBillForm) -> Self {
        Self {
            form,
            default_prevented: false,
        }
    }

    /// 既定動作（ページ遷移を伴う送信）を抑止する
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// フォームの入力値と保留中の領収書から更新用の経費を組み立てる
///
/// `amount`は先頭の整数部分のみ解釈し、解釈できなければ`None`になる。
/// `pct`は解釈できないか0の場合に`DEFAULT_PCT`になる。
pub fn assemble_bill(email: &str, form: &NewBillForm, staged: Option<&StagedReceipt>) -> Bill {
    Bill {
        id: None,
        email: email.to_string(),
        expense_type: form.expense_type.clone(),
        name: form.name.clone(),
        amount: parse_int_prefix(&form.amount),
        date: form.date.clone(),
        vat: form.vat.clone(),
        pct: parse_int_prefix(&form.pct)
            .filter(|pct| *pct != 0)
            .unwrap_or(DEFAULT_PCT),
        commentary: form.commentary.clone(),
        file_url: staged.map(|receipt| receipt.file_url.clone()),
        file_name: staged.map(|receipt| receipt.file_name.clone()),
        status: BillStatus::Pending,
        comment_admin: None,
    }
}
