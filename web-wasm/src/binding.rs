//! 画面バインディング（Leptosシグナル実装）
//!
//! 検索フローからの画面操作をシグナルへの書き込みに変換する。
//! 実際のDOMへの反映はコンポーネント側が行う。

use leptos::html::Input;
use leptos::prelude::*;
use photo_shopping_common::{PhotoForm, UploadView};
use web_sys::File;

/// 画面状態のシグナル一式
#[derive(Clone, Copy)]
pub struct SignalView {
    pub dialog_visible: RwSignal<bool>,
    pub form_hidden: RwSignal<bool>,
    pub category: RwSignal<String>,
    pub photo_input: NodeRef<Input>,
    pub loading_prompt: RwSignal<String>,
    pub cards: RwSignal<Vec<String>>,
    pub query: RwSignal<Option<String>>,
}

impl SignalView {
    pub fn new(default_category: &str) -> Self {
        Self {
            dialog_visible: RwSignal::new(false),
            form_hidden: RwSignal::new(true),
            category: RwSignal::new(default_category.to_string()),
            photo_input: NodeRef::new(),
            loading_prompt: RwSignal::new(String::new()),
            cards: RwSignal::new(Vec::new()),
            query: RwSignal::new(None),
        }
    }

    /// `<input type="file">` で選択中の1枚目
    fn selected_file(&self) -> Option<File> {
        self.photo_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
    }
}

impl UploadView for SignalView {
    type Photo = File;

    fn set_dialog_visible(&self, visible: bool) {
        self.dialog_visible.set(visible);
    }

    fn reveal_upload_form(&self) {
        self.form_hidden.set(false);
    }

    fn read_form(&self) -> PhotoForm<File> {
        PhotoForm {
            category: self.category.get_untracked(),
            photo: self.selected_file(),
        }
    }

    fn clear_results(&self) {
        self.cards.update(|cards| cards.clear());
        self.query.set(None);
    }

    fn set_loading_prompt(&self, text: &str) {
        self.loading_prompt.set(text.to_string());
    }

    fn append_card(&self, markup: String) {
        self.cards.update(|cards| cards.push(markup));
    }

    fn show_query(&self, query: &str) {
        self.query.set(Some(query.to_string()));
    }
}
