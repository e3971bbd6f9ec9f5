/// APIサーバーとのHTTP通信
pub mod api_client;

/// 共有設定管理
pub mod config;

/// 共有エラー型とエラーハンドリング
pub mod errors;

/// 画面遷移
pub mod navigation;

/// 画面との接続点
pub mod ui;

/// 共有ユーティリティ関数
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

// 便利な再エクスポート
pub use config::{
    get_environment, initialize_logging_system, load_environment_variables, ApiConfig,
    Environment, EnvironmentConfig, SessionConfig,
};
pub use errors::{AppError, AppResult, ErrorSeverity};
