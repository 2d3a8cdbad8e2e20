//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use ratelist_common::Session;

use crate::components::{
    header::Header,
    items_display::ItemsDisplay,
    loading_overlay::LoadingOverlay,
    upload_form::UploadForm,
};

/// メインアプリケーションコンポーネント
///
/// セッション状態は単一シグナルで保持し、各コンポーネントへ
/// read/write のペアで渡す。コレクション未読込ならアップロード画面、
/// 読込済みならアイテム一覧を表示する
#[component]
pub fn App() -> impl IntoView {
    let (session, set_session) = signal(Session::new());

    view! {
        <div class="page">
            <Header />

            <main class="container">
                <Show
                    when=move || session.with(|s| s.has_items())
                    fallback=move || {
                        view! { <UploadForm session=session set_session=set_session /> }
                    }
                >
                    <ItemsDisplay session=session set_session=set_session />
                </Show>
            </main>

            <Show when=move || session.with(|s| s.loading())>
                <LoadingOverlay />
            </Show>
        </div>
    }
}
