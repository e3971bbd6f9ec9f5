//! 画面との接続点
//!
//! 描画技術に依存しないように、イベントハンドラーの登録口とユーザー通知だけを定義する

use log::warn;

/// クリックなど引数のないイベントのハンドラー
pub type ClickHandler = Box<dyn Fn() + Send + Sync>;

/// 読み取り専用の引数を受け取るハンドラー
pub type TriggerHandler<T> = Box<dyn Fn(&T) + Send + Sync>;

/// イベントを書き換えるハンドラー（既定動作の抑止や入力値のクリア）
pub type EventHandler<E> = Box<dyn Fn(&mut E) + Send + Sync>;

/// ユーザーへのブロッキング通知
pub trait UserAlert: Send + Sync {
    fn alert(&self, message: &str);
}

/// 通知をログに出力するだけの実装（画面を持たない実行用）
#[derive(Debug, Default, Clone)]
pub struct LoggingAlert;

impl UserAlert for LoggingAlert {
    fn alert(&self, message: &str) {
        warn!("ユーザー通知: {message}");
    }
}

/// 全画面共通のレイアウト（ログアウトボタン）
pub trait LayoutView {
    /// ログアウトボタンのハンドラーを登録する
    fn on_logout(&mut self, handler: ClickHandler);
}
