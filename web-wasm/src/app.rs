//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use photo_shopping_common::{PhotoCategory, PhotoSearch, UploadSession};
use wasm_bindgen_futures::spawn_local;
use web_sys::console;
use crate::api::FetchTransport;
use crate::binding::SignalView;
use crate::components::{
    header::Header,
    upload_button::UploadButton,
    upload_dialog::UploadDialog,
    shopping_results::ShoppingResults,
};

fn photo_search(bindings: SignalView) -> PhotoSearch<SignalView, FetchTransport> {
    PhotoSearch::new(bindings, FetchTransport)
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let bindings = SignalView::new(PhotoCategory::default().as_str());

    // 最後に取得したアップロードURL（ダイアログを開くたびに置き換え）
    let session = RwSignal::new(None::<UploadSession>);

    // アップロードボタン: ダイアログを開き、アップロードURLを取得
    let on_upload_click = move |_| {
        spawn_local(async move {
            match photo_search(bindings).open_upload_dialog().await {
                Ok(new_session) => session.set(Some(new_session)),
                Err(e) => console::error_1(&format!("アップロードURL取得失敗: {}", e).into()),
            }
        });
    };

    let on_close = move |_| photo_search(bindings).close_dialog();

    // フォーム送信: 保持中のセッションへPOSTし、結果を描画
    let on_submit = move |_| {
        let Some(current) = session.get_untracked() else {
            console::warn_1(&"アップロードURLが未取得です".into());
            return;
        };
        spawn_local(async move {
            if let Err(e) = photo_search(bindings).submit(&current).await {
                console::error_1(&format!("写真送信失敗: {}", e).into());
            }
        });
    };

    view! {
        <div class="container">
            <Header />

            <UploadButton on_click=on_upload_click />

            <UploadDialog
                bindings=bindings
                on_submit=on_submit
                on_close=on_close
            />

            <ShoppingResults bindings=bindings />
        </div>
    }
}
