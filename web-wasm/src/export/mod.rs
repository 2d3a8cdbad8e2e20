//! エクスポート成果物のダウンロード処理

pub mod download;
