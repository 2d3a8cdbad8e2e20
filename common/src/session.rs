//! セッション状態（ビューコントローラ）
//!
//! ページ存続期間のUI状態を単一のstructで保持し、可変化はすべて
//! イベント由来の操作メソッド経由で行う。アンビエントなシングルトンは持たない

use crate::error::Error;
use crate::export::{export_shortlist, ExportArtifact};
use crate::filter::filter_items;
use crate::shortlist::Shortlist;
use crate::types::Item;

/// ショートリストが空のままエクスポートしたときの通知文
const EMPTY_SHORTLIST_NOTICE: &str = "Your shortlist is empty.";

/// 表示タブ（遷移制約なしの2値トグル）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    All,
    Shortlist,
}

/// アップロードライフサイクル
///
/// loading / items / error から導出される:
/// Idle -> Uploading -> {Loaded, Failed}、Loaded -> Idle はリセット、
/// Failed -> Uploading は再送信
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    Idle,
    Uploading,
    Loaded,
    Failed,
}

/// 1セッション分のアプリケーション状態
///
/// コレクションは抽出成功ごとに丸ごと差し替え、リセットで破棄する。
/// ショートリストとクエリはコレクションのライフサイクルから独立しており、
/// リセットを跨いで生存する
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    items: Option<Vec<Item>>,
    shortlist: Shortlist,
    query: String,
    active_tab: Tab,
    loading: bool,
    error: Option<String>,
    notice: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- 操作（イベントハンドラ） ----

    /// 送信開始: loading を立て、前回のエラーを消す
    pub fn on_upload_started(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// 抽出成功: コレクションを丸ごと差し替える
    ///
    /// ショートリストとクエリには触れない
    pub fn on_upload_succeeded(&mut self, items: Vec<Item>) {
        self.items = Some(items);
        self.loading = false;
    }

    /// 抽出失敗: エラーを保持し、コレクションは未設定のまま
    pub fn on_upload_failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// アップロード画面へ戻る
    ///
    /// コレクションと通知は破棄するが、ショートリストとクエリは保持する
    pub fn on_reset(&mut self) {
        self.items = None;
        self.active_tab = Tab::All;
        self.notice = None;
    }

    pub fn on_toggle_item(&mut self, id: impl Into<String>) {
        self.shortlist.toggle(id);
    }

    pub fn on_clear_shortlist(&mut self) {
        self.shortlist.clear();
    }

    pub fn on_query_change(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn on_select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// 現在のコレクションとショートリストでエクスポートする
    ///
    /// 選択が空なら通知を保持して None（ダウンロードは起きない）
    pub fn on_export(&mut self) -> Option<ExportArtifact> {
        match export_shortlist(self.items.as_deref().unwrap_or(&[]), &self.shortlist) {
            Ok(artifact) => {
                self.notice = None;
                Some(artifact)
            }
            Err(Error::EmptySelection) => {
                self.notice = Some(EMPTY_SHORTLIST_NOTICE.to_string());
                None
            }
            Err(e) => {
                self.notice = Some(format!("Export failed: {}", e));
                None
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // ---- 導出ビュー ----

    /// コレクションが読み込み済みか（空の抽出結果でも true）
    pub fn has_items(&self) -> bool {
        self.items.is_some()
    }

    pub fn item_count(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }

    /// 現在のクエリを通したコレクションのビュー
    pub fn filtered_items(&self) -> Vec<Item> {
        filter_items(self.items.as_deref().unwrap_or(&[]), &self.query)
    }

    /// ショートリスト済みアイテム（コレクション順、不明な識別子は無視）
    pub fn shortlisted_items(&self) -> Vec<Item> {
        self.items
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .filter(|item| self.shortlist.contains(&item.id()))
            .cloned()
            .collect()
    }

    pub fn is_shortlisted(&self, id: &str) -> bool {
        self.shortlist.contains(id)
    }

    pub fn shortlist_len(&self) -> usize {
        self.shortlist.len()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn phase(&self) -> UploadPhase {
        if self.loading {
            UploadPhase::Uploading
        } else if self.items.is_some() {
            UploadPhase::Loaded
        } else if self.error.is_some() {
            UploadPhase::Failed
        } else {
            UploadPhase::Idle
        }
    }
}
