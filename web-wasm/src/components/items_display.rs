//! アイテム一覧コンポーネント
//!
//! 全アイテム/ショートリストの2タブ、検索、クリア・エクスポート・リセット操作

use leptos::prelude::*;
use ratelist_common::{Session, Tab};

use crate::components::item_card::ItemCard;
use crate::export::download;

#[component]
pub fn ItemsDisplay(
    session: ReadSignal<Session>,
    set_session: WriteSignal<Session>,
) -> impl IntoView {
    let item_count = move || session.with(|s| s.item_count());
    let shortlist_count = move || session.with(|s| s.shortlist_len());
    let filtered = move || session.with(|s| s.filtered_items());
    let shortlisted = move || session.with(|s| s.shortlisted_items());
    let active_tab = move || session.with(|s| s.active_tab());

    let on_export = move |_| {
        if let Some(artifact) = set_session.try_update(|s| s.on_export()).flatten() {
            if let Err(err) = download::download_artifact(&artifact) {
                web_sys::console::error_1(&err);
            }
        }
    };

    view! {
        <div class="items-display">
            <div class="display-header">
                <h3>"Processed Items"</h3>
                <button
                    class="btn btn-outline"
                    on:click=move |_| set_session.update(|s| s.on_reset())
                >
                    "Upload Another PDF"
                </button>
            </div>

            <nav class="tabs">
                <button
                    class=move || {
                        if active_tab() == Tab::All { "tab active" } else { "tab" }
                    }
                    on:click=move |_| set_session.update(|s| s.on_select_tab(Tab::All))
                >
                    "All Items"
                    <span class="badge">{move || item_count()}</span>
                </button>
                <button
                    class=move || {
                        if active_tab() == Tab::Shortlist { "tab active" } else { "tab" }
                    }
                    on:click=move |_| {
                        set_session.update(|s| s.on_select_tab(Tab::Shortlist))
                    }
                >
                    "Shortlisted"
                    <span class="badge badge-green">{move || shortlist_count()}</span>
                </button>
            </nav>

            <Show when=move || active_tab() == Tab::All>
                <div class="search-bar">
                    <input
                        type="text"
                        placeholder="Search items..."
                        prop:value=move || session.with(|s| s.query().to_string())
                        on:input=move |ev| {
                            set_session.update(|s| s.on_query_change(event_target_value(&ev)))
                        }
                    />
                    <p class="search-count">
                        "Showing "
                        <span class="badge">{move || filtered().len()}</span>
                        " of "
                        <span class="badge">{move || item_count()}</span>
                        " items"
                    </p>
                </div>

                <Show
                    when=move || !filtered().is_empty()
                    fallback=|| {
                        view! {
                            <div class="alert alert-info">
                                "No items match your search criteria."
                            </div>
                        }
                    }
                >
                    <div class="item-grid">
                        <For
                            each=move || filtered()
                            key=|item| item.id()
                            children=move |item| {
                                view! {
                                    <ItemCard
                                        item=item
                                        session=session
                                        set_session=set_session
                                    />
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>

            <Show when=move || active_tab() == Tab::Shortlist>
                <div class="shortlist-actions">
                    <button
                        class="btn btn-danger-outline"
                        disabled=move || shortlist_count() == 0
                        on:click=move |_| set_session.update(|s| s.on_clear_shortlist())
                    >
                        "Clear Shortlist"
                    </button>
                    <button
                        class="btn btn-secondary"
                        disabled=move || shortlist_count() == 0
                        on:click=on_export
                    >
                        "Export Shortlist"
                    </button>
                </div>

                <Show when=move || session.with(|s| s.notice().is_some())>
                    <div class="alert alert-notice">
                        <p>
                            {move || {
                                session.with(|s| s.notice().unwrap_or("").to_string())
                            }}
                        </p>
                        <button
                            class="btn btn-small"
                            on:click=move |_| set_session.update(|s| s.dismiss_notice())
                        >
                            "OK"
                        </button>
                    </div>
                </Show>

                <Show
                    when=move || !shortlisted().is_empty()
                    fallback=|| {
                        view! {
                            <div class="empty-state">
                                <p>
                                    "Your shortlist is empty. Click on items to add them to your shortlist."
                                </p>
                            </div>
                        }
                    }
                >
                    <div class="item-grid">
                        <For
                            each=move || shortlisted()
                            key=|item| item.id()
                            children=move |item| {
                                view! {
                                    <ItemCard
                                        item=item
                                        session=session
                                        set_session=set_session
                                    />
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
