//! NPC プロファイルのドメイン型
//!
//! JSON ドキュメントから読み込む静的なペルソナ定義。
//! 欠けたフィールドは空文字・空配列として受け、既定値の適用は
//! プロンプト組み立て側で行う。

use serde::{Deserialize, Serialize};

/// NPC プロファイル（name / role / personality / interests）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NpcProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub personality: String,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl NpcProfile {
    /// interests をカンマ区切りで結合する（プロンプト埋め込み用）
    pub fn interests_joined(&self) -> String {
        self.interests.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserialize_full() {
        let json = r#"{
            "name": "Rocio",
            "role": "data analyst",
            "personality": "methodical and curious",
            "interests": ["python", "statistics"]
        }"#;
        let p: NpcProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.name, "Rocio");
        assert_eq!(p.role, "data analyst");
        assert_eq!(p.interests_joined(), "python, statistics");
    }

    #[test]
    fn test_profile_deserialize_missing_fields() {
        // フィールド欠落はエラーにせず空で受ける
        let p: NpcProfile = serde_json::from_str(r#"{"name": "Solo"}"#).unwrap();
        assert_eq!(p.name, "Solo");
        assert_eq!(p.role, "");
        assert!(p.interests.is_empty());
        assert_eq!(p.interests_joined(), "");
    }
}
