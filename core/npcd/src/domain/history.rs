//! 行動履歴（直近コマンドの有界バッファ）
//!
//! `"[HH:MM] <command>"` 形式のエントリを保持し、上限を超えたら
//! 先頭（最古）から追い出す。プロンプトの文脈としてのみ使い、
//! 永続化はしない。

use chrono::{DateTime, Local};

/// 履歴バッファの上限
pub const MAX_HISTORY: usize = 10;

/// 直近コマンドの有界履歴
#[derive(Debug, Clone, Default)]
pub struct ActionHistory {
    entries: Vec<String>,
}

impl ActionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 実行済みコマンドをタイムスタンプ付きで追加する。
    /// MAX_HISTORY を超えたら最古のエントリを捨てる。
    pub fn record(&mut self, last_command: &str, now: &DateTime<Local>) {
        self.entries
            .push(format!("[{}] {}", now.format("%H:%M"), last_command));
        if self.entries.len() > MAX_HISTORY {
            self.entries.remove(0);
        }
    }

    /// 全エントリ（古い順）
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// 直近 n 件（古い順のまま末尾から切り出す）
    pub fn recent(&self, n: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> DateTime<Local> {
        "2026-08-23T14:30:00+00:00"
            .parse::<DateTime<Local>>()
            .unwrap()
    }

    #[test]
    fn test_record_formats_timestamp_prefix() {
        let mut h = ActionHistory::new();
        let now = fixed_now();
        h.record("ls -la", &now);
        assert_eq!(h.len(), 1);
        let entry = &h.entries()[0];
        assert!(entry.starts_with('['), "entry: {}", entry);
        assert!(entry.ends_with("] ls -la"), "entry: {}", entry);
    }

    #[test]
    fn test_history_never_exceeds_bound() {
        let mut h = ActionHistory::new();
        let now = fixed_now();
        for i in 0..11 {
            h.record(&format!("cmd {}", i), &now);
        }
        assert_eq!(h.len(), MAX_HISTORY);
        // 11 件目の追加で 1 件目が追い出され、2〜11 件目が順序どおり残る
        assert!(h.entries()[0].ends_with("cmd 1"));
        assert!(h.entries()[9].ends_with("cmd 10"));
    }

    #[test]
    fn test_recent_returns_last_n_in_order() {
        let mut h = ActionHistory::new();
        let now = fixed_now();
        for i in 0..8 {
            h.record(&format!("cmd {}", i), &now);
        }
        let recent = h.recent(5);
        assert_eq!(recent.len(), 5);
        assert!(recent[0].ends_with("cmd 3"));
        assert!(recent[4].ends_with("cmd 7"));
    }

    #[test]
    fn test_recent_on_short_history() {
        let mut h = ActionHistory::new();
        let now = fixed_now();
        h.record("only one", &now);
        assert_eq!(h.recent(5).len(), 1);
        assert!(ActionHistory::new().recent(5).is_empty());
    }
}
