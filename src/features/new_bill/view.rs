use super::form::SubmitEvent;
use super::receipt::FileChangeEvent;
use crate::shared::ui::{EventHandler, LayoutView};

/// 新規経費画面のハンドラー登録口
pub trait NewBillPageView: LayoutView {
    /// ファイル入力の変更ハンドラーを登録する
    fn on_file_selected(&mut self, handler: EventHandler<FileChangeEvent>);

    /// フォーム送信のハンドラーを登録する
    fn on_submit(&mut self, handler: EventHandler<SubmitEvent>);
}
