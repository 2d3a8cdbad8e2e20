//! 抽出サービス連携
//!
//! PDFをアップロードし、構造化アイテムを受け取る。アップロード応答に
//! ペイロードが無い場合は get-data で再取得する

use ratelist_common::{parse_items_payload, Item};
use serde::Deserialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestCredentials, RequestInit, RequestMode, Response};

/// 抽出サービスのベースURL
const SERVICE_BASE_URL: &str = "http://127.0.0.1:5000";

/// アップロード時のフォームフィールド名
const PDF_FORM_FIELD: &str = "pdf_file";

const UPLOAD_FAILED_MESSAGE: &str = "Failed to process PDF";
const FETCH_FAILED_MESSAGE: &str = "Failed to fetch processed data";
const RETRIEVE_FAILED_MESSAGE: &str = "Failed to retrieve processed data";
const NETWORK_FAILED_MESSAGE: &str = "An error occurred while processing the file";

/// サービス応答の外側エンベロープ
#[derive(Debug, Clone, Deserialize)]
struct ServiceEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

/// PDFをアップロードして抽出済みアイテムを得る
///
/// 失敗はそのままUIに出せるメッセージ文字列で返す
pub async fn upload_pdf(file: &File) -> Result<Vec<Item>, String> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob(PDF_FORM_FIELD, file).map_err(js_error)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_credentials(RequestCredentials::Include);
    opts.set_body(form.as_ref());

    let url = format!("{}/api/upload", SERVICE_BASE_URL);
    let envelope = fetch_envelope(&url, &opts).await?;

    if !envelope.success {
        return Err(envelope
            .error
            .unwrap_or_else(|| UPLOAD_FAILED_MESSAGE.to_string()));
    }

    match envelope.data {
        Some(payload) => decode_items(&payload),
        // アップロード応答にペイロードが載らない構成へのフォールバック
        None => fetch_current_data().await,
    }
}

/// 現在の抽出データを再取得する
async fn fetch_current_data() -> Result<Vec<Item>, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    opts.set_credentials(RequestCredentials::Include);

    let url = format!("{}/api/get-data", SERVICE_BASE_URL);
    let envelope = fetch_envelope(&url, &opts).await?;

    if !envelope.success {
        return Err(envelope
            .error
            .unwrap_or_else(|| FETCH_FAILED_MESSAGE.to_string()));
    }

    match envelope.data {
        Some(payload) => decode_items(&payload),
        None => Err(RETRIEVE_FAILED_MESSAGE.to_string()),
    }
}

/// fetchを実行してエンベロープへデコードする
async fn fetch_envelope(url: &str, opts: &RequestInit) -> Result<ServiceEnvelope, String> {
    let request = Request::new_with_str_and_init(url, opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| NETWORK_FAILED_MESSAGE.to_string())?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(format!("Service error: {}", resp.status()));
    }

    let text_value = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text_value.as_string().unwrap_or_default();

    parse_envelope(&body)
}

/// エンベロープJSONをパースする
fn parse_envelope(body: &str) -> Result<ServiceEnvelope, String> {
    serde_json::from_str(body).map_err(|e| format!("Unexpected service response: {}", e))
}

/// ペイロードからアイテム配列を取り出す
fn decode_items(payload: &Value) -> Result<Vec<Item>, String> {
    parse_items_payload(payload).map_err(|e| e.to_string())
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_envelope_with_data() {
        let body = r#"{
            "success": true,
            "data": {"structured_data": {"items": [{"id": 1}]}}
        }"#;

        let envelope = parse_envelope(body).expect("パース失敗");
        assert!(envelope.success);
        let items = decode_items(envelope.data.as_ref().unwrap()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id(), "1");
    }

    #[test]
    fn test_parse_envelope_without_data() {
        let envelope = parse_envelope(r#"{"success": true}"#).expect("パース失敗");
        assert!(envelope.success);
        assert!(envelope.data.is_none());
        assert!(envelope.error.is_none());
    }

    #[test]
    fn test_parse_envelope_failure_with_message() {
        let envelope =
            parse_envelope(r#"{"success": false, "error": "no items found"}"#).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some("no items found"));
    }

    #[test]
    fn test_parse_envelope_missing_success_defaults_false() {
        let envelope = parse_envelope(r#"{}"#).unwrap();
        assert!(!envelope.success);
    }

    #[test]
    fn test_parse_envelope_rejects_non_json() {
        assert!(parse_envelope("<html>502</html>").is_err());
    }

    #[test]
    fn test_decode_items_bad_payload() {
        let payload = serde_json::json!({"structured_data": 5});
        let err = decode_items(&payload).unwrap_err();
        assert!(err.contains("payload error"));
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_form_data_carries_pdf_field() {
        let form = FormData::new().expect("FormData construction failed");
        form.append_with_str(PDF_FORM_FIELD, "placeholder")
            .expect("append failed");
        assert!(form.has(PDF_FORM_FIELD));
    }
}
