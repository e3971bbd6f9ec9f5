//! 経費ストア
//!
//! リモートのドキュメントストアに対する一覧取得・仮レコード作成・更新を抽象化する

use super::models::{Bill, CreatedBill, ReceiptUpload};
use crate::features::auth::session::SessionAccessor;
use crate::shared::api_client::ApiClient;
use crate::shared::errors::{AppError, AppResult};
use futures::future::BoxFuture;
use log::{debug, info};
use reqwest::multipart;
use std::sync::Arc;

/// 経費ストアのコラボレーター
///
/// いずれの操作も自動リトライしない
pub trait BillStore: Send + Sync {
    /// 経費一覧を取得する（ストアの返す順序のまま）
    fn list(&self) -> BoxFuture<'_, AppResult<Vec<Bill>>>;

    /// 領収書をアップロードして仮レコードを作成する
    fn create(&self, upload: ReceiptUpload) -> BoxFuture<'_, AppResult<CreatedBill>>;

    /// `selector`で指定したレコードを更新する
    fn update(&self, selector: Option<String>, bill: Bill) -> BoxFuture<'_, AppResult<Bill>>;
}

/// APIサーバー経由の経費ストア
pub struct HttpBillStore {
    api_client: ApiClient,
    session: Arc<dyn SessionAccessor>,
}

impl HttpBillStore {
    pub fn new(api_client: ApiClient, session: Arc<dyn SessionAccessor>) -> Self {
        Self {
            api_client,
            session,
        }
    }

    /// セッションから認証トークンを取得する
    fn auth_token(&self) -> AppResult<Option<String>> {
        self.session.get_token()
    }

    async fn list_internal(&self) -> AppResult<Vec<Bill>> {
        let token = self.auth_token()?;
        let bills: Vec<Bill> = self.api_client.get("bills", token.as_deref()).await?;
        debug!("経費一覧を受信しました: count={}", bills.len());
        Ok(bills)
    }

    async fn create_internal(&self, upload: ReceiptUpload) -> AppResult<CreatedBill> {
        let token = self.auth_token()?;

        let part = multipart::Part::bytes(upload.data)
            .file_name(upload.file_name.clone())
            .mime_str(&upload.content_type)
            .map_err(|e| AppError::validation(format!("MIMEタイプ設定エラー: {e}")))?;
        let form = multipart::Form::new()
            .part("file", part)
            .text("email", upload.email);

        let created: CreatedBill = self
            .api_client
            .post_multipart("bills", form, token.as_deref())
            .await?;

        info!(
            "仮レコードを作成しました: key={}, file_name={}",
            created.key, upload.file_name
        );
        Ok(created)
    }

    async fn update_internal(&self, selector: Option<String>, bill: Bill) -> AppResult<Bill> {
        let selector = selector
            .ok_or_else(|| AppError::not_found("更新対象の経費ID"))?;
        let token = self.auth_token()?;

        let endpoint = format!("bills/{}", urlencoding::encode(&selector));
        let updated: Bill = self
            .api_client
            .patch(&endpoint, &bill, token.as_deref())
            .await?;

        info!("経費を更新しました: selector={selector}");
        Ok(updated)
    }
}

impl BillStore for HttpBillStore {
    fn list(&self) -> BoxFuture<'_, AppResult<Vec<Bill>>> {
        Box::pin(self.list_internal())
    }

    fn create(&self, upload: ReceiptUpload) -> BoxFuture<'_, AppResult<CreatedBill>> {
        Box::pin(self.create_internal(upload))
    }

    fn update(&self, selector: Option<String>, bill: Bill) -> BoxFuture<'_, AppResult<Bill>> {
        Box::pin(self.update_internal(selector, bill))
    }
}
