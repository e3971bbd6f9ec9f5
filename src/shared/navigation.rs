//! 画面遷移
//!
//! ルーティングテーブル自体は持たず、遷移先の識別子とパスのみを定義する

use serde::{Deserialize, Serialize};

/// 遷移先の画面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// ログイン画面
    Login,
    /// 経費一覧画面（従業員）
    Bills,
    /// 経費作成画面（従業員）
    NewBill,
    /// ダッシュボード（管理者）
    Dashboard,
}

impl Route {
    /// ルートに対応するパスを取得
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
            Route::Dashboard => "#admin/dashboard",
        }
    }

    /// パスからルートを解決する
    pub fn from_path(path: &str) -> Option<Self> {
        [Route::Login, Route::Bills, Route::NewBill, Route::Dashboard]
            .into_iter()
            .find(|route| route.path() == path)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// 画面遷移を行うコラボレーター
///
/// 同期的に現在の画面を置き換える
pub trait Navigator: Send + Sync {
    fn go_to(&self, route: Route);
}

/// 遷移をログに出力するだけのナビゲーター（画面を持たない実行用）
#[derive(Debug, Default, Clone)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn go_to(&self, route: Route) {
        log::info!("画面遷移: {route}");
    }
}
