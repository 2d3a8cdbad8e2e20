//! アイテムカードコンポーネント
//!
//! product_name をタイトルにし、それ以外のフィールドは名前に依らず
//! 汎用的に一覧表示する

use leptos::prelude::*;
use ratelist_common::{stringify_value, Item, Session};

/// タイトル・識別子として別扱いするフィールド
const EXCLUDED_FIELDS: [&str; 2] = ["id", "product_name"];

const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// フィールド名を表示用ラベルへ整形する（"unit_price" → "Unit Price"）
fn format_field_label(key: &str) -> String {
    key.replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn ItemCard(
    item: Item,
    session: ReadSignal<Session>,
    set_session: WriteSignal<Session>,
) -> impl IntoView {
    let item_id = item.id();
    let title = item.product_name().unwrap_or(UNKNOWN_PRODUCT).to_string();

    let is_shortlisted = {
        let item_id = item_id.clone();
        move || session.with(|s| s.is_shortlisted(&item_id))
    };

    let detail_rows: Vec<(String, String)> = item
        .fields()
        .filter(|(key, _)| !EXCLUDED_FIELDS.contains(key))
        .map(|(key, value)| (format_field_label(key), stringify_value(value)))
        .collect();

    let is_shortlisted_class = is_shortlisted.clone();
    let is_shortlisted_star = is_shortlisted.clone();

    view! {
        <div class="item-card" class:shortlisted=is_shortlisted_class>
            <div class="item-card-head">
                <h3>{title}</h3>
                <button
                    class="star-toggle"
                    on:click={
                        let item_id = item_id.clone();
                        move |_| set_session.update(|s| s.on_toggle_item(item_id.clone()))
                    }
                >
                    {move || if is_shortlisted_star() { "★" } else { "☆" }}
                </button>
            </div>

            <div class="item-fields">
                {detail_rows
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="item-field">
                                <span class="field-label">{label}": "</span>
                                <span class="field-value">{value}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
