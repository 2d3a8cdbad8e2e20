//! クエリ/フィルタエンジン

use crate::types::Item;

/// フリーテキスト検索
///
/// 空・空白のみのクエリは恒等（全件を元の順序で返す）。それ以外は
/// いずれかのフィールド値（文字列化・小文字化）が小文字化したクエリを
/// 部分文字列として含むアイテムだけを、元の順序のまま返す。
/// `id` も他のフィールドと同様に照合対象。副作用なし
pub fn filter_items(items: &[Item], query: &str) -> Vec<Item> {
    if query.trim().is_empty() {
        return items.to_vec();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.stringified_values()
                .any(|value| value.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Vec<Item> {
        serde_json::from_value(json!([
            {"id": 1, "product_name": "Soap Bar", "unit_price": 25},
            {"id": 2, "product_name": "Shampoo", "unit_price": 120},
            {"id": 3, "product_name": "Hand Wash", "unit_price": 80, "fragrance": null}
        ]))
        .expect("カタログのデコード失敗")
    }

    #[test]
    fn test_empty_query_is_identity() {
        let items = catalog();
        assert_eq!(filter_items(&items, ""), items);
    }

    #[test]
    fn test_whitespace_query_is_identity() {
        let items = catalog();
        assert_eq!(filter_items(&items, "   "), items);
    }

    #[test]
    fn test_query_matches_product_name() {
        let items = catalog();
        let filtered = filter_items(&items, "soap");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].product_name(), Some("Soap Bar"));
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let items = catalog();
        let filtered = filter_items(&items, "SHAMPOO");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id(), "2");
    }

    #[test]
    fn test_query_matches_numeric_field() {
        let items = catalog();
        let filtered = filter_items(&items, "120");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id(), "2");
    }

    #[test]
    fn test_query_matches_id_field() {
        let items = catalog();
        let filtered = filter_items(&items, "3");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id(), "3");
    }

    #[test]
    fn test_null_value_matches_literal() {
        let items = catalog();
        let filtered = filter_items(&items, "null");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id(), "3");
    }

    #[test]
    fn test_result_preserves_relative_order() {
        let items = catalog();
        // "a" は Soap Bar / Shampoo / Hand Wash すべてに含まれる
        let filtered = filter_items(&items, "a");
        let ids: Vec<String> = filtered.iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let items = catalog();
        assert!(filter_items(&items, "toothpaste").is_empty());
    }

    #[test]
    fn test_filter_on_empty_collection() {
        assert!(filter_items(&[], "soap").is_empty());
    }
}
