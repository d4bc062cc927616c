//! アップロードボタンコンポーネント

use leptos::prelude::*;

#[component]
pub fn UploadButton<F>(on_click: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <button
            id="upload-photo-button"
            class="btn btn-primary"
            on:click=move |_| on_click(())
        >
            "Upload photo"
        </button>
    }
}
