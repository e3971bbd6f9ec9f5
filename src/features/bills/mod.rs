/// 経費一覧機能モジュール
///
/// このモジュールは経費一覧画面に関連するすべての機能を提供します：
/// - 経費データモデルとストアのレコード形式
/// - ストアからの一覧取得・仮レコード作成・更新
/// - 日付とステータスの表示用フォーマット
/// - 一覧画面のコントローラー（新規作成・領収書プレビュー）
// サブモジュールの宣言
pub mod format;
pub mod list_controller;
pub mod memory_store;
pub mod models;
pub mod store;
pub mod view;

// 公開インターフェース：外部から使用可能な型と関数をエクスポート

// モデル
pub use models::{Bill, BillStatus, CreatedBill, DisplayBill, ReceiptUpload, DEFAULT_PCT};

// フォーマット
pub use format::{format_date, format_status};

// ストア
pub use memory_store::MemoryBillStore;
pub use store::{BillStore, HttpBillStore};

// 画面
pub use list_controller::BillsListController;
pub use view::{BillsPage, BillsPageView, BillsTable, ReceiptModal, ReceiptPreview, ReceiptTrigger};
