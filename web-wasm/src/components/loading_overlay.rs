//! ローディングオーバーレイコンポーネント

use leptos::prelude::*;

/// アップロード処理中の全面オーバーレイ
///
/// 表示中は送信ボタンも無効化されるため、二重送信は起きない
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    view! {
        <div class="loading-overlay">
            <div class="loading-box">
                <div class="spinner"></div>
                <h4>"Processing PDF..."</h4>
                <p class="text-muted">
                    "This may take a minute or two depending on the file size."
                </p>
            </div>
        </div>
    }
}
