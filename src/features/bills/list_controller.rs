//! 経費一覧画面のコントローラー

use super::models::DisplayBill;
use super::store::BillStore;
use super::view::{BillsPageView, ReceiptModal, ReceiptPreview, ReceiptTrigger};
use crate::features::auth::logout::Logout;
use crate::features::auth::session::SessionAccessor;
use crate::shared::errors::AppResult;
use crate::shared::navigation::{Navigator, Route};
use log::debug;
use std::sync::Arc;

pub struct BillsListController {
    store: Option<Arc<dyn BillStore>>,
    navigator: Arc<dyn Navigator>,
    modal: Arc<dyn ReceiptModal>,
    logout: Arc<Logout>,
}

impl BillsListController {
    /// 新しいコントローラーを作成する
    ///
    /// `store`が`None`の場合、一覧取得は何も返さない
    pub fn new(
        store: Option<Arc<dyn BillStore>>,
        navigator: Arc<dyn Navigator>,
        modal: Arc<dyn ReceiptModal>,
        session: Arc<dyn SessionAccessor>,
    ) -> Self {
        let logout = Arc::new(Logout::new(session, Arc::clone(&navigator)));
        Self {
            store,
            navigator,
            modal,
            logout,
        }
    }

    /// 画面のトリガーにハンドラーを登録する
    pub fn attach(self: &Arc<Self>, view: &mut dyn BillsPageView) {
        let controller = Arc::clone(self);
        view.on_create_new(Box::new(move || controller.handle_click_new_bill()));

        let controller = Arc::clone(self);
        view.on_view_receipt(Box::new(move |trigger: &ReceiptTrigger| {
            controller.handle_click_icon_eye(trigger)
        }));

        self.logout.attach(view);
    }

    /// 「新しい経費」ボタン押下時の処理
    pub fn handle_click_new_bill(&self) {
        self.navigator.go_to(Route::NewBill);
    }

    /// 領収書アイコン押下時の処理
    ///
    /// モーダル幅の半分で領収書画像を表示する。URLがない場合は空の`src`になる
    pub fn handle_click_icon_eye(&self, trigger: &ReceiptTrigger) {
        let width = (self.modal.width() * 0.5).floor().max(0.0) as u32;
        let preview = ReceiptPreview {
            width,
            src: trigger.bill_url.clone().unwrap_or_default(),
        };

        debug!("領収書を表示します: src={}, width={}", preview.src, preview.width);
        self.modal.set_preview(preview);
        self.modal.show();
    }

    /// 経費一覧を取得して表示用に変換する
    ///
    /// # 戻り値
    /// * `None` - ストアが設定されていない
    /// * `Some(Err)` - ストアからの取得に失敗した（呼び出し側で表示する）
    /// * `Some(Ok)` - ストアの順序のままの表示用経費一覧
    pub async fn get_bills(&self) -> Option<AppResult<Vec<DisplayBill>>> {
        let store = self.store.as_ref()?;

        let result = store.list().await.map(|bills| {
            let display: Vec<DisplayBill> = bills.iter().map(DisplayBill::from_bill).collect();
            debug!("経費一覧: length={}", display.len());
            display
        });

        Some(result)
    }
}
