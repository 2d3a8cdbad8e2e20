//! 抽出アイテムの型定義
//!
//! 抽出サービスとクライアントで共有される型:
//! - Item: 抽出された1商品レコード（フィールド構成は可変）
//! - ExtractionPayload / StructuredData: サービスペイロードの形状

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `id` フィールドのキー名
pub const ID_FIELD: &str = "id";

/// 表示用商品名のキー名
pub const PRODUCT_NAME_FIELD: &str = "product_name";

/// 抽出された1アイテム
///
/// フィールド名→スカラー値（文字列・数値・null）の順序付きマップ。
/// `id` はセッション内で一意な識別子、`product_name` は表示用（任意）。
/// フィールド集合は開放的で、未知のフィールドもそのまま保持する。
/// 読み込み後は不変
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item {
    fields: Map<String, Value>,
}

impl Item {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// 識別子（`id` フィールドの文字列化）
    ///
    /// `id` 欠落時は "null" になり、欠落アイテム同士は同じキーを共有する
    pub fn id(&self) -> String {
        stringify_value(self.fields.get(ID_FIELD).unwrap_or(&Value::Null))
    }

    /// 表示用の商品名（欠落・空文字列は None）
    pub fn product_name(&self) -> Option<&str> {
        match self.fields.get(PRODUCT_NAME_FIELD) {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// 全フィールドを (名前, 値) で文書順に返す
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// 文字列化した全フィールド値（検索と表示で共通の表現）
    pub fn stringified_values(&self) -> impl Iterator<Item = String> + '_ {
        self.fields.values().map(stringify_value)
    }
}

impl From<Map<String, Value>> for Item {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// 値の文字列化（表示・検索・識別子で共通）
///
/// 文字列はそのまま、数値・真偽値は標準表記、nullは固定リテラル "null"。
/// ネスト値（想定外だが許容）はコンパクトJSON表記
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// 抽出サービスのペイロード
///
/// `{"structured_data": {"items": [...]}}` 形状。欠落キーは空として扱う
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionPayload {
    pub structured_data: StructuredData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredData {
    pub items: Vec<Item>,
}
