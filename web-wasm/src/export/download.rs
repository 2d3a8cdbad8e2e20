//! 成果物のブラウザダウンロード
//!
//! Blob → オブジェクトURL → 一時anchorのclick → URL破棄、の流れで
//! クライアントサイドのファイルダウンロードを起動する

use js_sys::Array;
use ratelist_common::ExportArtifact;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// 成果物をファイルとしてダウンロードさせる
pub fn download_artifact(artifact: &ExportArtifact) -> Result<(), JsValue> {
    let parts = Array::new();
    parts.push(&JsValue::from_str(&artifact.content));

    let options = BlobPropertyBag::new();
    options.set_type(artifact.mime_type);

    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(artifact.file_name);

    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;

    Url::revoke_object_url(&url)?;
    Ok(())
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_blob_url_roundtrip() {
        let parts = Array::new();
        parts.push(&JsValue::from_str("{}"));
        let options = BlobPropertyBag::new();
        options.set_type("application/json");

        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
            .expect("Blob construction failed");
        let url = Url::create_object_url_with_blob(&blob).expect("object URL failed");
        assert!(url.starts_with("blob:"));
        Url::revoke_object_url(&url).expect("revoke failed");
    }
}
