//! 汎用APIクライアント
//!
//! APIサーバーとの通信を行う。ストアの操作は自動リトライしない。

use crate::shared::config::environment::ApiConfig;
use crate::shared::errors::AppError;
use log::{debug, info, warn};
use reqwest::{multipart, Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;

/// APIサーバーからのエラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: String,
    pub message: String,
}

/// 汎用APIクライアント
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// 環境設定からAPIクライアントを作成
    pub fn new() -> Result<Self, AppError> {
        Self::new_with_config(ApiConfig::from_env())
    }

    /// 設定を指定してAPIクライアントを作成
    pub fn new_with_config(config: ApiConfig) -> Result<Self, AppError> {
        config.validate().map_err(AppError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTPクライアント初期化失敗: {e}")))?;

        Ok(Self { client, config })
    }

    /// ベースURLを取得
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// エンドポイントの完全なURLを組み立てる
    pub fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// GETリクエストを送信
    pub async fn get<T>(&self, endpoint: &str, auth_token: Option<&str>) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        info!("GETリクエスト送信: endpoint={endpoint}");
        let request = with_auth(self.client.get(self.url(endpoint)), auth_token);
        self.send_request(request, "GET", endpoint).await
    }

    /// マルチパートのPOSTリクエストを送信
    ///
    /// Content-Typeは指定せず、reqwestにboundary付きで設定させる
    pub async fn post_multipart<T>(
        &self,
        endpoint: &str,
        form: multipart::Form,
        auth_token: Option<&str>,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        info!("マルチパートPOSTリクエスト送信: endpoint={endpoint}");
        let request = with_auth(
            self.client.post(self.url(endpoint)).multipart(form),
            auth_token,
        );
        self.send_request(request, "POST", endpoint).await
    }

    /// PATCHリクエストを送信
    pub async fn patch<B, T>(
        &self,
        endpoint: &str,
        body: &B,
        auth_token: Option<&str>,
    ) -> Result<T, AppError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        info!("PATCHリクエスト送信: endpoint={endpoint}");
        let request = with_auth(self.client.patch(self.url(endpoint)).json(body), auth_token);
        self.send_request(request, "PATCH", endpoint).await
    }

    /// リクエストを送信してレスポンスを解析する
    async fn send_request<T>(
        &self,
        request: RequestBuilder,
        method: &str,
        endpoint: &str,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(self.handle_error_response(response).await);
        }

        let result: T = response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("レスポンス解析エラー: {e}")))?;

        info!("{method}リクエスト成功: endpoint={endpoint}");
        Ok(result)
    }

    /// エラーレスポンスをAppErrorに変換する
    async fn handle_error_response(&self, response: Response) -> AppError {
        let status_code = response.status().as_u16();
        let response_text = response
            .text()
            .await
            .unwrap_or_else(|_| "レスポンス読み取り失敗".to_string());

        warn!("APIサーバーエラーレスポンス: status={status_code}, body={response_text}");
        error_from_status(status_code, &response_text)
    }
}

/// 認証トークンがある場合はAuthorizationヘッダーを追加する
fn with_auth(request: RequestBuilder, auth_token: Option<&str>) -> RequestBuilder {
    match auth_token {
        Some(token) => request.header("Authorization", format!("Bearer {token}")),
        None => request,
    }
}

/// HTTPステータスとレスポンス本文からエラーを作成する
///
/// メッセージは`Erreur <status>`で始まり、一覧画面にそのまま表示される
pub fn error_from_status(status_code: u16, body: &str) -> AppError {
    let detail = match serde_json::from_str::<ErrorResponse>(body) {
        Ok(error_response) => {
            debug!(
                "構造化エラーレスポンスを受信: code={}, message={}",
                error_response.error.code, error_response.error.message
            );
            error_response.error.message
        }
        Err(_) => body.trim().to_string(),
    };

    if detail.is_empty() {
        AppError::ExternalService(format!("Erreur {status_code}"))
    } else {
        AppError::ExternalService(format!("Erreur {status_code} : {detail}"))
    }
}
