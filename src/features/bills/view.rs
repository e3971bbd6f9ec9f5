//! 経費一覧画面のビューモデル

use super::models::DisplayBill;
use crate::shared::errors::AppError;
use crate::shared::ui::{ClickHandler, LayoutView, TriggerHandler};
use serde::Serialize;

/// 領収書プレビューのトリガー（目のアイコン）
///
/// `bill-url`データ属性に相当する
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptTrigger {
    pub bill_url: Option<String>,
}

/// 一覧の1行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillRow {
    pub bill: DisplayBill,
    pub receipt_trigger: ReceiptTrigger,
}

impl From<DisplayBill> for BillRow {
    fn from(bill: DisplayBill) -> Self {
        let receipt_trigger = ReceiptTrigger {
            bill_url: bill.file_url.clone(),
        };
        Self {
            bill,
            receipt_trigger,
        }
    }
}

/// 経費一覧のテーブル
///
/// 行の順序は受け取った順のまま
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BillsTable {
    pub rows: Vec<BillRow>,
}

impl BillsTable {
    pub fn new(bills: Vec<DisplayBill>) -> Self {
        Self {
            rows: bills.into_iter().map(BillRow::from).collect(),
        }
    }

    /// 行数
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// すべての領収書プレビューのトリガー
    pub fn receipt_triggers(&self) -> impl Iterator<Item = &ReceiptTrigger> {
        self.rows.iter().map(|row| &row.receipt_trigger)
    }
}

/// 経費一覧画面の状態
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BillsPage {
    /// 読み込み中
    Loading,
    /// 表示できる経費一覧
    Loaded(BillsTable),
    /// 一覧取得に失敗した（エラーメッセージをそのまま表示する）
    Error(String),
}

impl BillsPage {
    /// 一覧取得の結果から画面状態を作成する
    ///
    /// `None`（ストアがない）は空の一覧として扱う
    pub fn from_result(result: Option<Result<Vec<DisplayBill>, AppError>>) -> Self {
        match result {
            None => BillsPage::Loaded(BillsTable::default()),
            Some(Ok(bills)) => BillsPage::Loaded(BillsTable::new(bills)),
            Some(Err(e)) => BillsPage::Error(e.user_message().to_string()),
        }
    }

    /// 表示されるエラーメッセージ
    pub fn error_message(&self) -> Option<&str> {
        match self {
            BillsPage::Error(message) => Some(message),
            _ => None,
        }
    }

    /// 表示されるテーブル
    pub fn table(&self) -> Option<&BillsTable> {
        match self {
            BillsPage::Loaded(table) => Some(table),
            _ => None,
        }
    }
}

/// 領収書プレビューの内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptPreview {
    /// 画像の表示幅（モーダル幅の50%）
    pub width: u32,
    /// 画像のURL（ない場合は空文字列）
    pub src: String,
}

/// 領収書を表示するモーダル
pub trait ReceiptModal: Send + Sync {
    /// モーダルの現在の幅
    fn width(&self) -> f64;

    /// モーダル本文に画像を差し込む
    fn set_preview(&self, preview: ReceiptPreview);

    /// モーダルを開く
    fn show(&self);
}

/// プレビューをログに出力するだけのモーダル（画面を持たない実行用）
#[derive(Debug, Clone)]
pub struct LoggingReceiptModal {
    width: f64,
}

impl LoggingReceiptModal {
    pub fn new(width: f64) -> Self {
        Self { width }
    }
}

impl ReceiptModal for LoggingReceiptModal {
    fn width(&self) -> f64 {
        self.width
    }

    fn set_preview(&self, preview: ReceiptPreview) {
        log::info!("領収書プレビュー: src={}, width={}", preview.src, preview.width);
    }

    fn show(&self) {
        log::debug!("領収書モーダルを表示します");
    }
}

/// 経費一覧画面のハンドラー登録口
pub trait BillsPageView: LayoutView {
    /// 「新しい経費」ボタンのハンドラーを登録する
    fn on_create_new(&mut self, handler: ClickHandler);

    /// 領収書プレビューのハンドラーを登録する
    fn on_view_receipt(&mut self, handler: TriggerHandler<ReceiptTrigger>);
}
