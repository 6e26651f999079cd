//! プロンプト組み立て（純関数）
//!
//! プロファイルと履歴から system 指示文と user 本文を作る。
//! 副作用なし。既定値の適用（プロファイル未ロード時）もここで行う。

use crate::domain::{ActionHistory, NpcProfile};

/// user 本文に含める履歴の件数
pub const RECENT_WINDOW: usize = 5;

const DEFAULT_NAME: &str = "Agent";
const DEFAULT_ROLE: &str = "user";
const DEFAULT_PERSONALITY: &str = "curious and helpful";
const DEFAULT_INTERESTS: &str = "technology, learning";

/// プロファイルから system 指示文を組み立てる
///
/// name / role / personality / interests をそのまま埋め込み、
/// 行動制約（ワークスペース内・1 コマンド・非破壊）を付ける。
pub fn system_prompt(profile: Option<&NpcProfile>, workspace: &str) -> String {
    let (name, role, personality, interests) = match profile {
        Some(p) => (
            non_empty_or(&p.name, DEFAULT_NAME),
            non_empty_or(&p.role, DEFAULT_ROLE),
            non_empty_or(&p.personality, DEFAULT_PERSONALITY),
            if p.interests.is_empty() {
                DEFAULT_INTERESTS.to_string()
            } else {
                p.interests_joined()
            },
        ),
        None => (
            DEFAULT_NAME.to_string(),
            DEFAULT_ROLE.to_string(),
            DEFAULT_PERSONALITY.to_string(),
            DEFAULT_INTERESTS.to_string(),
        ),
    };

    format!(
        r#"You are simulating the computer activity of {name}, a {role}.

Personality: {personality}
Interests: {interests}
Working Directory: {workspace}/

Your job is to generate realistic Linux bash commands that this person would execute on their computer.
The commands should:
1. Be realistic and appropriate for this person's role and interests
2. Create files, folders, or perform tasks related to their work/interests
3. Be safe and non-destructive
4. Stay within the workspace directory
5. Show human-like behavior (mix of work, learning, curiosity)

IMPORTANT RULES:
- ALWAYS start commands with: cd {workspace} &&
- Generate ONE command at a time
- Be creative but realistic
- Mix different types of activities (creating files, organizing, researching, learning)
- Sometimes do mundane tasks, sometimes interesting ones
- Respond ONLY with the bash command, no explanations

Example commands:
cd {workspace} && mkdir -p projects/ai_research
cd {workspace} && echo "Research notes on neural networks" > notes.txt
cd {workspace} && find . -name "*.txt" -exec wc -l {{}} \;
"#
    )
}

/// 履歴から user 本文を組み立てる
///
/// 直近 RECENT_WINDOW 件を列挙する。履歴が空のときは汎用の
/// 開始プロンプトを返す。
pub fn user_prompt(history: &ActionHistory) -> String {
    if history.is_empty() {
        return "What should I do first on my computer?".to_string();
    }
    let recent = history.recent(RECENT_WINDOW).join("\n");
    format!("Recent activities:\n{}\n\nWhat should I do next?", recent)
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn sample_profile() -> NpcProfile {
        NpcProfile {
            name: "Rocio".to_string(),
            role: "data analyst".to_string(),
            personality: "methodical and curious".to_string(),
            interests: vec!["python".to_string(), "statistics".to_string()],
        }
    }

    #[test]
    fn test_system_prompt_embeds_profile_verbatim() {
        let p = sample_profile();
        let prompt = system_prompt(Some(&p), "/tmp/ws");
        assert!(prompt.contains("Rocio"));
        assert!(prompt.contains("a data analyst"));
        assert!(prompt.contains("Personality: methodical and curious"));
        assert!(prompt.contains("Interests: python, statistics"));
        assert!(prompt.contains("Working Directory: /tmp/ws/"));
        assert!(prompt.contains("cd /tmp/ws &&"));
    }

    #[test]
    fn test_system_prompt_without_profile_uses_defaults() {
        let prompt = system_prompt(None, "/tmp/ws");
        assert!(prompt.contains("Agent, a user"));
        assert!(prompt.contains("Personality: curious and helpful"));
        assert!(prompt.contains("Interests: technology, learning"));
    }

    #[test]
    fn test_system_prompt_empty_fields_fall_back() {
        let p = NpcProfile {
            name: "Solo".to_string(),
            ..Default::default()
        };
        let prompt = system_prompt(Some(&p), "/tmp/ws");
        assert!(prompt.contains("Solo, a user"));
        assert!(prompt.contains("Interests: technology, learning"));
    }

    #[test]
    fn test_user_prompt_empty_history() {
        let h = ActionHistory::new();
        assert_eq!(user_prompt(&h), "What should I do first on my computer?");
    }

    #[test]
    fn test_user_prompt_lists_recent_entries_only() {
        let mut h = ActionHistory::new();
        let now = Local::now();
        for i in 0..7 {
            h.record(&format!("cmd {}", i), &now);
        }
        let prompt = user_prompt(&h);
        assert!(prompt.starts_with("Recent activities:\n"));
        assert!(prompt.ends_with("What should I do next?"));
        // 直近 5 件のみ（cmd 0 / cmd 1 は含まれない）
        assert!(!prompt.contains("cmd 0\n"));
        assert!(!prompt.contains("cmd 1\n"));
        assert!(prompt.contains("cmd 2"));
        assert!(prompt.contains("cmd 6"));
    }
}
