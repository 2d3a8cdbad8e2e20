//! ショートリストのエクスポート直列化

use crate::error::{Error, Result};
use crate::shortlist::Shortlist;
use crate::types::Item;

/// エクスポート成果物の固定ファイル名
pub const EXPORT_FILE_NAME: &str = "shortlisted_items.json";

/// 成果物のMIMEタイプ
pub const EXPORT_MIME_TYPE: &str = "application/json";

/// ダウンロード可能なエクスポート成果物
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub content: String,
}

/// ショートリスト済みアイテムをJSONへ直列化する
///
/// 選択はコレクション順を保ち、コレクションに存在しない識別子は
/// 黙って無視する。選択が空なら EmptySelection で成果物は作らない。
/// フィールド順・アイテム順ともに入力で決まるため、同一入力からは
/// バイト単位で同一の成果物が得られる
pub fn export_shortlist(items: &[Item], shortlist: &Shortlist) -> Result<ExportArtifact> {
    let selected: Vec<&Item> = items
        .iter()
        .filter(|item| shortlist.contains(&item.id()))
        .collect();

    if selected.is_empty() {
        return Err(Error::EmptySelection);
    }

    let content = serde_json::to_string_pretty(&selected)?;
    Ok(ExportArtifact {
        file_name: EXPORT_FILE_NAME,
        mime_type: EXPORT_MIME_TYPE,
        content,
    })
}
