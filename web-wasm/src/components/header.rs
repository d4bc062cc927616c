//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Photo Shopping"</h1>
            <p class="text-muted">"Take a photo of a product, a shopping list or a barcode and find it online"</p>
        </header>
    }
}
