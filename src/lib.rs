// 機能モジュール構造
pub mod features;
pub mod shared;

use features::auth::session::{FileSessionStore, SessionAccessor};
use features::bills::list_controller::BillsListController;
use features::bills::memory_store::MemoryBillStore;
use features::bills::store::{BillStore, HttpBillStore};
use features::bills::view::{BillsPage, LoggingReceiptModal, ReceiptModal};
use features::new_bill::controller::NewBillController;
use log::{info, warn};
use shared::api_client::ApiClient;
use shared::config::environment::{
    initialize_logging_system, load_environment_variables, ApiConfig, EnvironmentConfig,
    SessionConfig,
};
use shared::errors::AppResult;
use shared::navigation::{LoggingNavigator, Navigator};
use shared::ui::{LoggingAlert, UserAlert};
use std::sync::Arc;

/// 画面を持たない実行でのモーダル幅
const HEADLESS_MODAL_WIDTH: f64 = 800.0;

/// コントローラーが共有するコラボレーター
pub struct AppContext {
    pub store: Option<Arc<dyn BillStore>>,
    pub session: Arc<dyn SessionAccessor>,
    pub navigator: Arc<dyn Navigator>,
    pub alert: Arc<dyn UserAlert>,
}

impl AppContext {
    /// 設定からコラボレーターを組み立てる
    ///
    /// `API_SERVER_URL=memory`の場合はメモリ上のストアを使用する
    pub fn new(api_config: ApiConfig, session_config: SessionConfig) -> AppResult<Self> {
        let session: Arc<dyn SessionAccessor> =
            Arc::new(FileSessionStore::new(session_config.session_file));

        let store: Arc<dyn BillStore> = if api_config.is_memory() {
            info!("メモリ上の経費ストアを使用します");
            Arc::new(MemoryBillStore::new())
        } else {
            let api_client = ApiClient::new_with_config(api_config)?;
            info!("APIサーバーを使用します: {}", api_client.base_url());
            Arc::new(HttpBillStore::new(api_client, Arc::clone(&session)))
        };

        Ok(Self {
            store: Some(store),
            session,
            navigator: Arc::new(LoggingNavigator),
            alert: Arc::new(LoggingAlert),
        })
    }

    /// 環境変数の設定からコラボレーターを組み立てる
    pub fn from_env() -> AppResult<Self> {
        Self::new(ApiConfig::from_env(), SessionConfig::from_env())
    }

    /// 経費一覧画面のコントローラーを作成する
    pub fn bills_list_controller(&self, modal: Arc<dyn ReceiptModal>) -> BillsListController {
        BillsListController::new(
            self.store.clone(),
            Arc::clone(&self.navigator),
            modal,
            Arc::clone(&self.session),
        )
    }

    /// 新規経費画面のコントローラーを作成する
    pub fn new_bill_controller(&self) -> NewBillController {
        NewBillController::new(
            self.store.clone(),
            Arc::clone(&self.navigator),
            Arc::clone(&self.alert),
            Arc::clone(&self.session),
        )
    }
}

/// 環境を初期化し、ログイン中のユーザーの経費一覧を取得して出力する
pub async fn run() -> AppResult<()> {
    // 環境に応じた.envファイルを読み込み（ログシステム初期化前に実行）
    load_environment_variables();
    initialize_logging_system();

    let env_config = EnvironmentConfig::from_env();
    info!(
        "アプリケーション初期化を開始します: environment={}, debug={}",
        env_config.environment, env_config.debug_mode
    );

    let context = AppContext::from_env()?;
    match context.session.get_user() {
        Ok(user) => info!("ログイン中のユーザー: {} ({:?})", user.email, user.user_type),
        Err(e) => warn!("ログイン中のユーザーがいません: {e}"),
    }

    let controller =
        context.bills_list_controller(Arc::new(LoggingReceiptModal::new(HEADLESS_MODAL_WIDTH)));
    let page = BillsPage::from_result(controller.get_bills().await);

    match &page {
        BillsPage::Loaded(table) => {
            info!("経費一覧を取得しました: {}件", table.len());
            for row in &table.rows {
                info!(
                    "{} | {} | {} | {:?} | {}",
                    row.bill.expense_type, row.bill.name, row.bill.date, row.bill.amount,
                    row.bill.status
                );
            }
        }
        BillsPage::Error(message) => warn!("経費一覧の取得に失敗しました: {message}"),
        BillsPage::Loading => {}
    }

    info!("アプリケーションを終了します");
    Ok(())
}
