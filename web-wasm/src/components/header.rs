//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"JANTA COSMETICS"</h1>
            <p class="header-subtitle">"Purchase Portal"</p>
        </header>
    }
}
