//! 端末用の画面バインディング
//!
//! ダイアログやフォームの表示は持たないのでログに残すだけ。
//! カードは後でHTML保存できるように溜めておく。

use photo_shopping_common::{PhotoFile, PhotoForm, UploadView};
use std::cell::RefCell;
use tracing::{debug, info};

pub struct TerminalView {
    form: PhotoForm<PhotoFile>,
    cards: RefCell<Vec<String>>,
}

impl TerminalView {
    pub fn new(form: PhotoForm<PhotoFile>) -> Self {
        Self {
            form,
            cards: RefCell::new(Vec::new()),
        }
    }

    /// 描画済みカードを取り出す
    pub fn take_cards(&self) -> Vec<String> {
        self.cards.take()
    }
}

impl UploadView for TerminalView {
    type Photo = PhotoFile;

    fn set_dialog_visible(&self, visible: bool) {
        debug!(visible, "アップロードダイアログ");
    }

    fn reveal_upload_form(&self) {
        debug!("アップロードURL取得済み");
    }

    fn read_form(&self) -> PhotoForm<PhotoFile> {
        self.form.clone()
    }

    fn clear_results(&self) {
        self.cards.borrow_mut().clear();
    }

    fn set_loading_prompt(&self, text: &str) {
        if !text.is_empty() {
            info!("{}", text);
        }
    }

    fn append_card(&self, markup: String) {
        self.cards.borrow_mut().push(markup);
    }

    fn show_query(&self, query: &str) {
        info!(query, "検索クエリ");
    }
}
