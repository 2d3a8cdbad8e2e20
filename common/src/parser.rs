//! 抽出サービスレスポンスのパーサー
//!
//! アップロード応答・再取得応答のペイロードからアイテム配列を取り出す

use crate::error::{Error, Result};
use crate::types::{ExtractionPayload, Item};
use serde_json::Value;

/// ペイロードからアイテム配列を取り出す
///
/// `{"structured_data": {"items": [...]}}` 形状を期待する。キーの欠落は
/// 空配列として扱う（元クライアントの `data?.structured_data?.items || []` 相当）。
/// 形状そのものが合わない場合は Payload エラー
///
/// # Arguments
/// * `payload` - サービス応答の `data` 部分
///
/// # Returns
/// * `Ok(Vec<Item>)` - デコード成功（0件もあり得る）
/// * `Err` - ペイロード形状が不正
pub fn parse_items_payload(payload: &Value) -> Result<Vec<Item>> {
    let payload: ExtractionPayload = serde_json::from_value(payload.clone())
        .map_err(|e| Error::Payload(format!("unexpected payload shape: {}", e)))?;
    Ok(payload.structured_data.items)
}
