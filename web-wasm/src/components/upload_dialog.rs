//! アップロードダイアログコンポーネント
//!
//! `.bg-model` のモーダルと、その中の写真アップロードフォーム。
//! フォームはアップロードURLを取得できるまで `hidden`。

use leptos::prelude::*;
use photo_shopping_common::PhotoCategory;
use crate::binding::SignalView;

/// ダイアログの display スタイル値
pub fn dialog_display(visible: bool) -> &'static str {
    if visible {
        "flex"
    } else {
        "none"
    }
}

#[component]
pub fn UploadDialog<FS, FC>(
    bindings: SignalView,
    on_submit: FS,
    on_close: FC,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
{
    let category = bindings.category;

    view! {
        <div
            class="bg-model"
            style:display=move || dialog_display(bindings.dialog_visible.get())
        >
            <div class="model-content">
                <button
                    type="button"
                    class="close"
                    on:click=move |_| on_close(())
                >
                    "×"
                </button>

                <form
                    id="upload-image-form"
                    class:hidden=move || bindings.form_hidden.get()
                    on:submit=move |ev| {
                        ev.prevent_default();
                        on_submit(());
                    }
                >
                    <label for="photo-category">"Photo category"</label>
                    <select
                        id="photo-category"
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        {PhotoCategory::ALL
                            .into_iter()
                            .map(|c| {
                                view! {
                                    <option
                                        value=c.as_str()
                                        selected=move || category.get() == c.as_str()
                                    >
                                        {c.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>

                    <input
                        type="file"
                        id="input-photo"
                        accept="image/*"
                        node_ref=bindings.photo_input
                    />

                    <button type="submit" class="btn btn-primary">"Search"</button>
                </form>
            </div>
        </div>
    }
}
