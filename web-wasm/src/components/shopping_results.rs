//! 検索結果コンポーネント

use leptos::prelude::*;
use photo_shopping_common::CARD_CONTAINER_CLASS;
use crate::binding::SignalView;

#[component]
pub fn ShoppingResults(bindings: SignalView) -> impl IntoView {
    view! {
        <p id="search-loading-prompt" class="text-muted">
            {move || bindings.loading_prompt.get()}
        </p>

        <Show when=move || bindings.query.get().is_some()>
            <p class="search-query">
                {move || format!("Results for \"{}\"", bindings.query.get().unwrap_or_default())}
            </p>
        </Show>

        // カードはサーバーの返却順に並べる
        <div id="shopping-results-wrapper" class="row">
            {move || {
                bindings
                    .cards
                    .get()
                    .into_iter()
                    .map(|markup| view! { <div class=CARD_CONTAINER_CLASS inner_html=markup></div> })
                    .collect_view()
            }}
        </div>
    }
}
