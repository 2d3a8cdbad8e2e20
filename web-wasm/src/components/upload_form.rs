//! PDFアップロードフォームコンポーネント
//!
//! ファイル選択時にPDF以外を送信前に弾き、送信中は再送信を無効化する

use leptos::prelude::*;
use ratelist_common::Session;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::api::extraction;

const PDF_MIME_TYPE: &str = "application/pdf";
const FILE_INPUT_ID: &str = "pdf-file";

const INVALID_FILE_MESSAGE: &str = "Please select a valid PDF file";
const NO_FILE_MESSAGE: &str = "Please select a PDF file";

/// ファイル入力要素を引く
///
/// 選択済みFileはシグナルに持たず、input要素自身に持たせたままにする
fn file_input() -> Option<HtmlInputElement> {
    let document = web_sys::window()?.document()?;
    document.get_element_by_id(FILE_INPUT_ID)?.dyn_into().ok()
}

/// 現在選択中のファイル
fn selected_file() -> Option<web_sys::File> {
    file_input()?.files()?.get(0)
}

#[component]
pub fn UploadForm(
    session: ReadSignal<Session>,
    set_session: WriteSignal<Session>,
) -> impl IntoView {
    // 検証済みファイル名（送信可否の判定に使う）
    let (file_name, set_file_name) = signal(None::<String>);
    // 送信前に弾いたローカルエラー（非PDF選択・未選択）
    let (local_error, set_local_error) = signal(None::<String>);

    let on_file_change = move |_| match selected_file() {
        Some(file) if file.type_() == PDF_MIME_TYPE => {
            set_local_error.set(None);
            set_file_name.set(Some(file.name()));
        }
        Some(_) => {
            // 非PDFは選択自体を取り消す
            if let Some(input) = file_input() {
                input.set_value("");
            }
            set_file_name.set(None);
            set_local_error.set(Some(INVALID_FILE_MESSAGE.to_string()));
        }
        None => {
            set_file_name.set(None);
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(file) = selected_file() else {
            set_local_error.set(Some(NO_FILE_MESSAGE.to_string()));
            return;
        };
        if file.type_() != PDF_MIME_TYPE {
            set_local_error.set(Some(INVALID_FILE_MESSAGE.to_string()));
            return;
        }

        set_local_error.set(None);
        set_session.update(|s| s.on_upload_started());

        wasm_bindgen_futures::spawn_local(async move {
            match extraction::upload_pdf(&file).await {
                Ok(items) => set_session.update(|s| s.on_upload_succeeded(items)),
                Err(message) => {
                    web_sys::console::error_1(
                        &format!("upload failed: {}", message).into(),
                    );
                    set_session.update(|s| s.on_upload_failed(message));
                }
            }
        });
    };

    // ローカルエラーを優先し、無ければセッションのエラーを出す
    let error_message = move || {
        local_error
            .get()
            .or_else(|| session.with(|s| s.error().map(str::to_string)))
    };

    view! {
        <div class="upload-card">
            <h2>"Upload Supplier Rate List"</h2>
            <p class="text-muted">
                "Upload a PDF file to extract structured data of products and prices."
            </p>

            <Show when=move || error_message().is_some()>
                <div class="alert alert-error">
                    <p>{move || error_message().unwrap_or_default()}</p>
                </div>
            </Show>

            <form on:submit=on_submit>
                <div class="form-group">
                    <label for=FILE_INPUT_ID>"PDF File"</label>
                    <input
                        type="file"
                        id=FILE_INPUT_ID
                        accept=".pdf"
                        on:change=on_file_change
                    />
                    <p class="text-muted">"Only PDF files are supported."</p>
                </div>

                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || {
                        file_name.get().is_none() || session.with(|s| s.loading())
                    }
                >
                    "Process PDF"
                </button>
            </form>
        </div>
    }
}
