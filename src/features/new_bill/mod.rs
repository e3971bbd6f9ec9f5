/// 新規経費機能モジュール
///
/// このモジュールは経費作成画面に関連する機能を提供します：
/// - 領収書ファイルの拡張子チェックとアップロード
/// - フォーム入力値からの経費データの組み立て
/// - 送信と一覧画面への遷移
// サブモジュールの宣言
pub mod controller;
pub mod form;
pub mod receipt;
pub mod view;

// 公開インターフェース
pub use controller::NewBillController;
pub use form::{assemble_bill, NewBillForm, SubmitEvent};
pub use receipt::{
    is_allowed_receipt, FileChangeEvent, SelectedFile, StagedReceipt,
    INVALID_RECEIPT_FORMAT_MESSAGE,
};
pub use view::NewBillPageView;
