//! テスト用のフィクスチャと記録用コラボレーター

use crate::features::bills::models::{Bill, BillStatus, CreatedBill, ReceiptUpload};
use crate::features::bills::store::BillStore;
use crate::features::bills::view::{BillsPageView, ReceiptModal, ReceiptPreview, ReceiptTrigger};
use crate::features::new_bill::form::SubmitEvent;
use crate::features::new_bill::receipt::FileChangeEvent;
use crate::features::new_bill::view::NewBillPageView;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::navigation::{Navigator, Route};
use crate::shared::ui::{ClickHandler, EventHandler, LayoutView, TriggerHandler, UserAlert};
use futures::future::BoxFuture;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// ストアが返す4件の経費
pub fn sample_bills() -> Vec<Bill> {
    let bill = |id: &str, name: &str, date: &str, status: BillStatus, file: &str| Bill {
        id: Some(id.to_string()),
        email: "a@a".to_string(),
        expense_type: "Hôtel et logement".to_string(),
        name: name.to_string(),
        amount: Some(400),
        date: date.to_string(),
        vat: "80".to_string(),
        pct: 20,
        commentary: "séminaire billed".to_string(),
        file_url: Some(format!("https://test.storage.tld/v0/b/billable/{file}")),
        file_name: Some(file.to_string()),
        status,
        comment_admin: Some("ok".to_string()),
    };

    vec![
        bill(
            "47qAXb6fIm2zOKkLzMro",
            "encore",
            "2004-04-04",
            BillStatus::Pending,
            "preview-facture-free-201801-pdf-1.jpg",
        ),
        bill(
            "BeKy5Mo4jkmdfPGYpTxZ",
            "test1",
            "2001-01-01",
            BillStatus::Accepted,
            "1592770761.jpeg",
        ),
        bill(
            "UIUZtnPQvnbFnB0ozvJh",
            "test3",
            "2003-03-03",
            BillStatus::Refused,
            "facture-client-php-exportee-dans-document-pdf-enregistre-sur-disque-dur.png",
        ),
        bill(
            "qcCK3SzECmaZAGRrHjaC",
            "test2",
            "2002-02-02",
            BillStatus::Pending,
            "facture.jpg",
        ),
    ]
}

/// すべての操作が同じエラーで失敗するストア
pub struct FailingBillStore {
    message: String,
}

impl FailingBillStore {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    fn error(&self) -> AppError {
        AppError::external_service(self.message.clone())
    }
}

impl BillStore for FailingBillStore {
    fn list(&self) -> BoxFuture<'_, AppResult<Vec<Bill>>> {
        let error = self.error();
        Box::pin(async move { Err(error) })
    }

    fn create(&self, _upload: ReceiptUpload) -> BoxFuture<'_, AppResult<CreatedBill>> {
        let error = self.error();
        Box::pin(async move { Err(error) })
    }

    fn update(&self, _selector: Option<String>, _bill: Bill) -> BoxFuture<'_, AppResult<Bill>> {
        let error = self.error();
        Box::pin(async move { Err(error) })
    }
}

/// 呼び出しを記録するストア
///
/// `create`は常に同じ`CreatedBill`を返し、`update`は受け取った経費をそのまま返す
pub struct RecordingBillStore {
    created: CreatedBill,
    create_error: Option<String>,
    update_error: Option<String>,
    update_gate: Option<Arc<Notify>>,
    uploads: Mutex<Vec<ReceiptUpload>>,
    updates: Mutex<Vec<(Option<String>, Bill)>>,
}

impl RecordingBillStore {
    pub fn new(file_url: &str, key: &str) -> Self {
        Self {
            created: CreatedBill {
                file_url: file_url.to_string(),
                key: key.to_string(),
            },
            create_error: None,
            update_error: None,
            update_gate: None,
            uploads: Mutex::new(Vec::new()),
            updates: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_create(mut self, message: &str) -> Self {
        self.create_error = Some(message.to_string());
        self
    }

    pub fn failing_update(mut self, message: &str) -> Self {
        self.update_error = Some(message.to_string());
        self
    }

    /// `gate`が通知されるまで`update`の完了を保留する
    pub fn with_update_gate(mut self, gate: Arc<Notify>) -> Self {
        self.update_gate = Some(gate);
        self
    }

    pub fn uploads(&self) -> Vec<ReceiptUpload> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<(Option<String>, Bill)> {
        self.updates.lock().unwrap().clone()
    }
}

impl BillStore for RecordingBillStore {
    fn list(&self) -> BoxFuture<'_, AppResult<Vec<Bill>>> {
        let bills = self
            .updates()
            .into_iter()
            .map(|(_, bill)| bill)
            .collect::<Vec<_>>();
        Box::pin(async move { Ok(bills) })
    }

    fn create(&self, upload: ReceiptUpload) -> BoxFuture<'_, AppResult<CreatedBill>> {
        self.uploads.lock().unwrap().push(upload);
        let result = match &self.create_error {
            Some(message) => Err(AppError::external_service(message.clone())),
            None => Ok(self.created.clone()),
        };
        Box::pin(async move { result })
    }

    fn update(&self, selector: Option<String>, mut bill: Bill) -> BoxFuture<'_, AppResult<Bill>> {
        self.updates
            .lock()
            .unwrap()
            .push((selector.clone(), bill.clone()));
        let error = self.update_error.clone();
        let gate = self.update_gate.clone();

        Box::pin(async move {
            if let Some(gate) = gate {
                gate.notified().await;
            }
            match error {
                Some(message) => Err(AppError::external_service(message)),
                None => {
                    bill.id = selector;
                    Ok(bill)
                }
            }
        })
    }
}

/// 遷移先を記録するナビゲーター
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

/// 通知メッセージを記録する
#[derive(Default)]
pub struct RecordingAlert {
    messages: Mutex<Vec<String>>,
}

impl RecordingAlert {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl UserAlert for RecordingAlert {
    fn alert(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// 幅が固定のモーダル
pub struct RecordingModal {
    width: f64,
    previews: Mutex<Vec<ReceiptPreview>>,
    shows: Mutex<usize>,
}

impl RecordingModal {
    pub fn with_width(width: f64) -> Self {
        Self {
            width,
            previews: Mutex::new(Vec::new()),
            shows: Mutex::new(0),
        }
    }

    pub fn previews(&self) -> Vec<ReceiptPreview> {
        self.previews.lock().unwrap().clone()
    }

    pub fn show_count(&self) -> usize {
        *self.shows.lock().unwrap()
    }
}

impl ReceiptModal for RecordingModal {
    fn width(&self) -> f64 {
        self.width
    }

    fn set_preview(&self, preview: ReceiptPreview) {
        self.previews.lock().unwrap().push(preview);
    }

    fn show(&self) {
        *self.shows.lock().unwrap() += 1;
    }
}

/// ログアウトボタンだけを持つレイアウト
#[derive(Default)]
pub struct RecordingLayout {
    logout: Option<ClickHandler>,
}

impl RecordingLayout {
    pub fn click_logout(&self) {
        if let Some(handler) = &self.logout {
            handler();
        }
    }
}

impl LayoutView for RecordingLayout {
    fn on_logout(&mut self, handler: ClickHandler) {
        self.logout = Some(handler);
    }
}

/// 登録されたハンドラーを保持する経費一覧画面
#[derive(Default)]
pub struct RecordingBillsView {
    layout: RecordingLayout,
    create_new: Option<ClickHandler>,
    view_receipt: Option<TriggerHandler<ReceiptTrigger>>,
}

impl RecordingBillsView {
    pub fn click_create_new(&self) {
        if let Some(handler) = &self.create_new {
            handler();
        }
    }

    pub fn click_receipt(&self, trigger: &ReceiptTrigger) {
        if let Some(handler) = &self.view_receipt {
            handler(trigger);
        }
    }

    pub fn click_logout(&self) {
        self.layout.click_logout();
    }
}

impl LayoutView for RecordingBillsView {
    fn on_logout(&mut self, handler: ClickHandler) {
        self.layout.on_logout(handler);
    }
}

impl BillsPageView for RecordingBillsView {
    fn on_create_new(&mut self, handler: ClickHandler) {
        self.create_new = Some(handler);
    }

    fn on_view_receipt(&mut self, handler: TriggerHandler<ReceiptTrigger>) {
        self.view_receipt = Some(handler);
    }
}

/// 登録されたハンドラーを保持する新規経費画面
#[derive(Default)]
pub struct RecordingNewBillView {
    layout: RecordingLayout,
    file_selected: Option<EventHandler<FileChangeEvent>>,
    submit: Option<EventHandler<SubmitEvent>>,
}

impl RecordingNewBillView {
    pub fn select_file(&self, event: &mut FileChangeEvent) {
        if let Some(handler) = &self.file_selected {
            handler(event);
        }
    }

    pub fn submit(&self, event: &mut SubmitEvent) {
        if let Some(handler) = &self.submit {
            handler(event);
        }
    }

    pub fn click_logout(&self) {
        self.layout.click_logout();
    }
}

impl LayoutView for RecordingNewBillView {
    fn on_logout(&mut self, handler: ClickHandler) {
        self.layout.on_logout(handler);
    }
}

impl NewBillPageView for RecordingNewBillView {
    fn on_file_selected(&mut self, handler: EventHandler<FileChangeEvent>) {
        self.file_selected = Some(handler);
    }

    fn on_submit(&mut self, handler: EventHandler<SubmitEvent>) {
        self.submit = Some(handler);
    }
}
