//! メモリ上の経費ストア
//!
//! APIサーバーを使わずに動作させる場合とテストで使用する

use super::models::{Bill, BillStatus, CreatedBill, ReceiptUpload};
use super::store::BillStore;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::nanoid::generate_bill_id;
use futures::future::BoxFuture;
use log::info;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryBillStore {
    bills: Mutex<Vec<Bill>>,
}

impl MemoryBillStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存の経費データでストアを作成
    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            bills: Mutex::new(bills),
        }
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, Vec<Bill>>> {
        self.bills
            .lock()
            .map_err(|e| AppError::concurrency(format!("ストアのロック取得エラー: {e}")))
    }

    fn list_sync(&self) -> AppResult<Vec<Bill>> {
        Ok(self.lock()?.clone())
    }

    fn create_sync(&self, upload: ReceiptUpload) -> AppResult<CreatedBill> {
        let key = generate_bill_id();
        let file_url = format!("memory://receipts/{key}/{}", upload.file_name);

        let provisional = Bill {
            id: Some(key.clone()),
            email: upload.email,
            expense_type: String::new(),
            name: String::new(),
            amount: None,
            date: String::new(),
            vat: String::new(),
            pct: super::models::DEFAULT_PCT,
            commentary: String::new(),
            file_url: Some(file_url.clone()),
            file_name: Some(upload.file_name),
            status: BillStatus::Pending,
            comment_admin: None,
        };
        self.lock()?.push(provisional);

        info!("仮レコードを作成しました: key={key}");
        Ok(CreatedBill { file_url, key })
    }

    fn update_sync(&self, selector: Option<String>, mut bill: Bill) -> AppResult<Bill> {
        let selector = selector.ok_or_else(|| AppError::not_found("更新対象の経費ID"))?;

        let mut bills = self.lock()?;
        let slot = bills
            .iter_mut()
            .find(|existing| existing.id.as_deref() == Some(selector.as_str()))
            .ok_or_else(|| AppError::not_found(format!("経費({selector})")))?;

        bill.id = Some(selector);
        *slot = bill.clone();
        Ok(bill)
    }
}

impl BillStore for MemoryBillStore {
    fn list(&self) -> BoxFuture<'_, AppResult<Vec<Bill>>> {
        let result = self.list_sync();
        Box::pin(async move { result })
    }

    fn create(&self, upload: ReceiptUpload) -> BoxFuture<'_, AppResult<CreatedBill>> {
        let result = self.create_sync(upload);
        Box::pin(async move { result })
    }

    fn update(&self, selector: Option<String>, bill: Bill) -> BoxFuture<'_, AppResult<Bill>> {
        let result = self.update_sync(selector, bill);
        Box::pin(async move { result })
    }
}
