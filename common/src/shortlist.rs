//! ショートリスト（選択アイテム集合）

/// アイテム識別子の挿入順集合
///
/// コレクションの差し替え・破棄とは独立に生存する。現在のコレクションに
/// 存在しない識別子を含んでもよく、利用側が突き合わせて無視する。
/// 全操作は任意の識別子に対して全域
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shortlist {
    ids: Vec<String>,
}

impl Shortlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// 含まれていれば除去、なければ末尾に追加する
    pub fn toggle(&mut self, id: impl Into<String>) {
        let id = id.into();
        if let Some(pos) = self.ids.iter().position(|x| *x == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    /// 内容に関わらず空にする
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|x| x == id)
    }

    /// 挿入順の識別子列（テストでの決定的な走査用）
    pub fn members(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_missing_id() {
        let mut shortlist = Shortlist::new();
        shortlist.toggle("2");
        assert!(shortlist.contains("2"));
        assert_eq!(shortlist.len(), 1);
    }

    #[test]
    fn test_toggle_removes_present_id() {
        let mut shortlist = Shortlist::new();
        shortlist.toggle("2");
        shortlist.toggle("2");
        assert!(!shortlist.contains("2"));
        assert!(shortlist.is_empty());
    }

    #[test]
    fn test_toggle_is_self_inverse() {
        let mut shortlist = Shortlist::new();
        shortlist.toggle("1");
        shortlist.toggle("5");
        let before = shortlist.clone();

        shortlist.toggle("3");
        shortlist.toggle("3");
        assert_eq!(shortlist, before);
    }

    #[test]
    fn test_members_keep_insertion_order() {
        let mut shortlist = Shortlist::new();
        shortlist.toggle("5");
        shortlist.toggle("1");
        shortlist.toggle("3");
        assert_eq!(shortlist.members(), ["5", "1", "3"]);
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let mut shortlist = Shortlist::new();
        shortlist.toggle("5");
        shortlist.toggle("1");
        shortlist.toggle("3");
        shortlist.toggle("1");
        assert_eq!(shortlist.members(), ["5", "3"]);
    }

    #[test]
    fn test_clear_empties_regardless_of_contents() {
        let mut shortlist = Shortlist::new();
        shortlist.toggle("a");
        shortlist.toggle("b");
        shortlist.clear();
        assert!(shortlist.is_empty());

        // 空集合への clear も無害
        shortlist.clear();
        assert!(shortlist.is_empty());
    }

    #[test]
    fn test_operations_total_over_unknown_ids() {
        let mut shortlist = Shortlist::new();
        assert!(!shortlist.contains("ghost"));
        shortlist.toggle("ghost");
        assert!(shortlist.contains("ghost"));
    }
}
