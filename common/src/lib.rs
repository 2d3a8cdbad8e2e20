//! Rate List Portal 共通ライブラリ
//!
//! WASMクライアントから利用される型とセッションロジック

pub mod types;
pub mod error;
pub mod parser;
pub mod filter;
pub mod shortlist;
pub mod export;
pub mod session;

pub use types::{stringify_value, ExtractionPayload, Item, StructuredData};
pub use error::{Error, Result};
pub use parser::parse_items_payload;
pub use filter::filter_items;
pub use shortlist::Shortlist;
pub use export::{export_shortlist, ExportArtifact, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
pub use session::{Session, Tab, UploadPhase};
