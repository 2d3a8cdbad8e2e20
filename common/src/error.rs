//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// ショートリストに現在のコレクションのアイテムが1件も無い
    #[error("no shortlisted items to export")]
    EmptySelection,

    #[error("payload error: {0}")]
    Payload(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_empty_selection() {
        let error = Error::EmptySelection;
        let display = format!("{}", error);
        assert_eq!(display, "no shortlisted items to export");
    }

    #[test]
    fn test_error_display_payload() {
        let error = Error::Payload("structured_data missing".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "payload error: structured_data missing");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Payload("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Payload"));
        assert!(debug.contains("テスト"));
    }
}
