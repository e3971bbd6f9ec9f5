//! 新規経費画面のコントローラー

use super::form::{assemble_bill, SubmitEvent};
use super::receipt::{
    content_type_for, is_allowed_receipt, FileChangeEvent, StagedReceipt,
    INVALID_RECEIPT_FORMAT_MESSAGE,
};
use super::view::NewBillPageView;
use crate::features::auth::logout::Logout;
use crate::features::auth::session::SessionAccessor;
use crate::features::bills::models::{Bill, ReceiptUpload};
use crate::features::bills::store::BillStore;
use crate::shared::navigation::{Navigator, Route};
use crate::shared::ui::UserAlert;
use log::{debug, error, info, warn};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub struct NewBillController {
    store: Option<Arc<dyn BillStore>>,
    navigator: Arc<dyn Navigator>,
    alert: Arc<dyn UserAlert>,
    session: Arc<dyn SessionAccessor>,
    logout: Arc<Logout>,
    /// アップロード済みで送信待ちの領収書（アップロード完了時のみ書き込まれる）
    staged: Arc<watch::Sender<Option<StagedReceipt>>>,
}

impl NewBillController {
    /// 新しいコントローラーを作成する
    ///
    /// `store`が`None`の場合、アップロードと更新は行われない
    pub fn new(
        store: Option<Arc<dyn BillStore>>,
        navigator: Arc<dyn Navigator>,
        alert: Arc<dyn UserAlert>,
        session: Arc<dyn SessionAccessor>,
    ) -> Self {
        let logout = Arc::new(Logout::new(Arc::clone(&session), Arc::clone(&navigator)));
        let (staged, _) = watch::channel(None);
        Self {
            store,
            navigator,
            alert,
            session,
            logout,
            staged: Arc::new(staged),
        }
    }

    /// 画面のトリガーにハンドラーを登録する
    pub fn attach(self: &Arc<Self>, view: &mut dyn NewBillPageView) {
        let controller = Arc::clone(self);
        view.on_file_selected(Box::new(move |event: &mut FileChangeEvent| {
            let _ = controller.handle_change_file(event);
        }));

        let controller = Arc::clone(self);
        view.on_submit(Box::new(move |event: &mut SubmitEvent| {
            let _ = controller.handle_submit(event);
        }));

        self.logout.attach(view);
    }

    /// 現在保留中の領収書
    pub fn staged(&self) -> Option<StagedReceipt> {
        self.staged.borrow().clone()
    }

    /// 保留中の領収書の変更を購読する
    pub fn subscribe(&self) -> watch::Receiver<Option<StagedReceipt>> {
        self.staged.subscribe()
    }

    /// ファイル選択時の処理
    ///
    /// 拡張子がjpg・jpeg・png以外の場合は通知して入力をクリアする。
    /// それ以外はアップロードを開始し、完了を待たずにタスクのハンドルを返す。
    pub fn handle_change_file(&self, event: &mut FileChangeEvent) -> Option<JoinHandle<()>> {
        event.prevent_default();

        let file_name = event.display_file_name();
        if !is_allowed_receipt(&file_name) {
            warn!("対応していないファイル形式です: {file_name}");
            self.alert.alert(INVALID_RECEIPT_FORMAT_MESSAGE);
            event.value.clear();
            return None;
        }

        let Some(file) = event.file.clone() else {
            warn!("ファイルが選択されていません: {file_name}");
            return None;
        };

        let email = match self.session.get_user() {
            Ok(user) => user.email,
            Err(e) => {
                error!("ユーザー情報の取得に失敗したためアップロードを中止します: {e}");
                return None;
            }
        };

        let Some(store) = self.store.clone() else {
            debug!("ストアが設定されていないためアップロードしません");
            return None;
        };

        let upload = ReceiptUpload {
            file_name: file_name.clone(),
            content_type: content_type_for(&file_name).to_string(),
            data: file.data,
            email,
        };
        let staged = Arc::clone(&self.staged);

        debug!("領収書のアップロードを開始します: {file_name}");
        Some(tokio::spawn(async move {
            match store.create(upload).await {
                Ok(created) => {
                    info!("領収書をアップロードしました: fileUrl={}", created.file_url);
                    staged.send_replace(Some(StagedReceipt {
                        file_url: created.file_url,
                        file_name,
                        bill_id: created.key,
                    }));
                }
                Err(e) => error!("領収書のアップロードに失敗しました: {e}"),
            }
        }))
    }

    /// フォーム送信時の処理
    ///
    /// 更新の完了を待たずに一覧画面へ遷移し、更新に成功した場合はもう一度遷移する
    pub fn handle_submit(&self, event: &mut SubmitEvent) -> Option<JoinHandle<()>> {
        event.prevent_default();

        let handle = match self.session.get_user() {
            Ok(user) => {
                let staged = self.staged();
                let bill = assemble_bill(&user.email, &event.form, staged.as_ref());
                debug!(
                    "経費を送信します: type={}, name={}, pct={}",
                    bill.expense_type, bill.name, bill.pct
                );
                self.update_bill(staged.map(|receipt| receipt.bill_id), bill)
            }
            Err(e) => {
                error!("ユーザー情報の取得に失敗したため経費を送信できません: {e}");
                None
            }
        };

        self.navigator.go_to(Route::Bills);
        handle
    }

    fn update_bill(&self, bill_id: Option<String>, bill: Bill) -> Option<JoinHandle<()>> {
        let Some(store) = self.store.clone() else {
            debug!("ストアが設定されていないため経費を更新しません");
            return None;
        };
        let navigator = Arc::clone(&self.navigator);

        Some(tokio::spawn(async move {
            match store.update(bill_id, bill).await {
                Ok(updated) => {
                    info!("経費を更新しました: id={:?}", updated.id);
                    navigator.go_to(Route::Bills);
                }
                Err(e) => error!("経費の更新に失敗しました: {e}"),
            }
        }))
    }
}
