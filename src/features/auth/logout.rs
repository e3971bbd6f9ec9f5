use super::session::SessionAccessor;
use crate::shared::navigation::{Navigator, Route};
use crate::shared::ui::LayoutView;
use log::{error, info};
use std::sync::Arc;

/// ログアウト処理
///
/// セッションを削除してログイン画面に遷移する
pub struct Logout {
    session: Arc<dyn SessionAccessor>,
    navigator: Arc<dyn Navigator>,
}

impl Logout {
    pub fn new(session: Arc<dyn SessionAccessor>, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }

    /// レイアウトのログアウトボタンにハンドラーを登録する
    pub fn attach<V: LayoutView + ?Sized>(self: &Arc<Self>, view: &mut V) {
        let logout = Arc::clone(self);
        view.on_logout(Box::new(move || logout.handle_click()));
    }

    /// ログアウトボタン押下時の処理
    ///
    /// セッションの削除に失敗してもログイン画面には遷移する
    pub fn handle_click(&self) {
        match self.session.clear() {
            Ok(()) => info!("ログアウトしました"),
            Err(e) => error!("セッションの削除に失敗しました: {e}"),
        }
        self.navigator.go_to(Route::Login);
    }
}
