//! コマンド決定の記録（不変レコード）
//!
//! 生成したコマンド 1 件につき 1 レコード。JSONL と CSV の
//! 両方に追記され、以後変更されない。

use serde::Serialize;

/// コマンド実行後の待機秒数（timeline 設定由来の固定値）
pub const DELAY_AFTER_SECS: u32 = 15;

/// 1 回のコマンド決定の記録
#[derive(Debug, Clone, Serialize)]
pub struct CommandRecord {
    /// ISO8601 タイムスタンプ（ローカル時刻）
    pub timestamp: String,
    pub npc_name: String,
    pub npc_role: String,
    pub command: String,
    pub working_directory: String,
    pub delay_after: u32,
    /// 使用したモデル識別子（モック時は "mock"）
    pub llm_model: String,
    /// 日付由来のセッション ID（%Y%m%d）
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_all_fields() {
        let rec = CommandRecord {
            timestamp: "2026-08-23T14:30:00+02:00".to_string(),
            npc_name: "Rocio".to_string(),
            npc_role: "data analyst".to_string(),
            command: "cd /tmp/ws && ls".to_string(),
            working_directory: "/tmp/ws".to_string(),
            delay_after: DELAY_AFTER_SECS,
            llm_model: "gpt-4o-mini".to_string(),
            session_id: "20260823".to_string(),
        };
        let v: serde_json::Value = serde_json::to_value(&rec).unwrap();
        assert_eq!(v["npc_name"], "Rocio");
        assert_eq!(v["delay_after"], 15);
        assert_eq!(v["session_id"], "20260823");
        assert_eq!(v["llm_model"], "gpt-4o-mini");
    }
}
