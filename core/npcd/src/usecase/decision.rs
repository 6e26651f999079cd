//! コマンド決定ユースケース
//!
//! プロファイル + 有界履歴からコマンド 1 件を生成し、決定を
//! 追記ログに記録する。プロバイダ呼び出しの失敗は固定の
//! フォールバックコマンドに置き換え、呼び出し元へは伝播させない。

use crate::adapter::load_profile;
use crate::domain::record::DELAY_AFTER_SECS;
use crate::domain::{ActionHistory, CommandRecord, NpcProfile};
use crate::ports::outbound::CommandLog;
use crate::prompt;
use chrono::Local;
use common::error::Error;
use common::llm::CompletionProvider;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// 1 回の決定結果（HTTP 応答の材料）
#[derive(Debug, Clone)]
pub struct Decision {
    pub command: String,
    pub npc_name: String,
    pub timestamp: String,
}

/// ヘルスチェック用のスナップショット
#[derive(Debug, Clone)]
pub struct HealthSnapshot {
    pub llm_enabled: bool,
    pub npc_loaded: bool,
    pub npc_name: String,
}

/// コマンド決定サービス
///
/// プロセス全体で共有する可変状態（プロファイル・履歴）を保持し、
/// 並行リクエストに備えて lock で守る。
pub struct DecisionService {
    profile: RwLock<Option<NpcProfile>>,
    history: Mutex<ActionHistory>,
    provider: Arc<dyn CompletionProvider>,
    llm_enabled: bool,
    command_log: Arc<dyn CommandLog>,
    log: Arc<dyn Log>,
    workspace: String,
    profile_path: PathBuf,
}

impl DecisionService {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        llm_enabled: bool,
        command_log: Arc<dyn CommandLog>,
        log: Arc<dyn Log>,
        workspace: impl Into<String>,
        profile_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            profile: RwLock::new(None),
            history: Mutex::new(ActionHistory::new()),
            provider,
            llm_enabled,
            command_log,
            log,
            workspace: workspace.into(),
            profile_path: profile_path.into(),
        }
    }

    /// プロファイルを読み直す。成功時は全置換、失敗時は警告を
    /// 記録して現在値（未ロード含む）を維持する。
    pub async fn reload_profile(&self) -> Result<String, Error> {
        match load_profile(&self.profile_path) {
            Ok(p) => {
                let name = p.name.clone();
                *self.profile.write().await = Some(p);
                self.log_record(
                    LogRecord::new(LogLevel::Info, "profile", "NPC profile loaded")
                        .with_field("name", serde_json::json!(name)),
                );
                Ok(name)
            }
            Err(e) => {
                eprintln!("Warning: Failed to load NPC profile: {}", e);
                self.log_record(
                    LogRecord::new(LogLevel::Warn, "profile", "Failed to load NPC profile")
                        .with_field("error", serde_json::json!(e.to_string())),
                );
                Err(e)
            }
        }
    }

    /// 次のコマンドを 1 件生成する（中心操作）
    ///
    /// `last_command` があれば履歴へ追加し、プロンプトを組み立てて
    /// プロバイダを呼ぶ。失敗時は固定フォールバック。決定は 2 つの
    /// 追記ログへ記録するが、記録失敗はこの操作を失敗させない。
    pub async fn next_command(
        &self,
        last_command: Option<&str>,
        _context: Option<&str>,
    ) -> Result<Decision, Error> {
        if let Some(cmd) = last_command.filter(|c| !c.trim().is_empty()) {
            self.history.lock().await.record(cmd, &Local::now());
        }

        let now = Local::now();
        let (system, user) = {
            let profile = self.profile.read().await;
            let history = self.history.lock().await;
            (
                prompt::system_prompt(profile.as_ref(), &self.workspace),
                prompt::user_prompt(&history),
            )
        };

        let command = match self.provider.complete(&system, &user).await {
            Ok(text) => ensure_workspace_prefix(text.trim(), &self.workspace),
            Err(e) => {
                eprintln!("Warning: Completion request failed: {}", e);
                self.log_record(
                    LogRecord::new(LogLevel::Error, "llm", "Completion request failed")
                        .with_field("error", serde_json::json!(e.to_string()))
                        .with_field("provider", serde_json::json!(self.provider.name())),
                );
                error_fallback_command(&self.workspace)
            }
        };

        let (npc_name, npc_role) = {
            let profile = self.profile.read().await;
            match profile.as_ref() {
                Some(p) => (p.name.clone(), p.role.clone()),
                None => ("Unknown".to_string(), "Unknown".to_string()),
            }
        };

        let record = CommandRecord {
            timestamp: now.to_rfc3339(),
            npc_name: npc_name.clone(),
            npc_role,
            command: command.clone(),
            working_directory: self.workspace.clone(),
            delay_after: DELAY_AFTER_SECS,
            llm_model: self.provider.model().to_string(),
            session_id: now.format("%Y%m%d").to_string(),
        };

        if let Err(e) = self.command_log.append(&record) {
            eprintln!("Warning: Failed to log command: {}", e);
            self.log_record(
                LogRecord::new(LogLevel::Error, "decision", "Failed to log command")
                    .with_field("error", serde_json::json!(e.to_string())),
            );
        }

        self.log_record(
            LogRecord::new(LogLevel::Info, "decision", "command generated")
                .with_field("provider", serde_json::json!(self.provider.name()))
                .with_field("command", serde_json::json!(command)),
        );

        Ok(Decision {
            command,
            npc_name: if npc_name == "Unknown" {
                "Agent".to_string()
            } else {
                npc_name
            },
            timestamp: now.to_rfc3339(),
        })
    }

    /// ヘルスチェック用の状態スナップショット
    pub async fn health(&self) -> HealthSnapshot {
        let profile = self.profile.read().await;
        HealthSnapshot {
            llm_enabled: self.llm_enabled,
            npc_loaded: profile.is_some(),
            npc_name: profile
                .as_ref()
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "Not loaded".to_string()),
        }
    }

    /// 現在のプロファイル名（reload 応答用。未ロード時は "Unknown"）
    pub async fn npc_name(&self) -> String {
        self.profile
            .read()
            .await
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// 履歴のスナップショット（古い順）
    pub async fn history_snapshot(&self) -> Vec<String> {
        self.history.lock().await.entries().to_vec()
    }

    /// 固定ワークスペースのパス
    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    /// 起動時の lifecycle レコードを書く
    pub fn log_startup(&self, addr: &str) {
        self.log_record(
            LogRecord::new(LogLevel::Info, "lifecycle", "service started")
                .with_field("addr", serde_json::json!(addr))
                .with_field("provider", serde_json::json!(self.provider.name()))
                .with_field("workspace", serde_json::json!(self.workspace)),
        );
    }

    fn log_record(&self, record: LogRecord) {
        if let Err(e) = self.log.log(&record) {
            eprintln!("Warning: Failed to write service log: {}", e);
        }
    }
}

/// 生成コマンドのワークスペース接頭辞を保証する
///
/// 既に `cd <workspace>` で始まらない場合のみ `cd <workspace> && ` を
/// 前置する。
pub fn ensure_workspace_prefix(command: &str, workspace: &str) -> String {
    let prefix = format!("cd {}", workspace);
    if command.starts_with(&prefix) {
        command.to_string()
    } else {
        format!("cd {} && {}", workspace, command)
    }
}

/// 上流呼び出し失敗時の固定フォールバックコマンド
pub fn error_fallback_command(workspace: &str) -> String {
    format!("cd {} && echo 'LLM error' > error.log", workspace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_workspace_prefix_prepends_when_missing() {
        let cmd = ensure_workspace_prefix("ls -la", "/tmp/ws");
        assert_eq!(cmd, "cd /tmp/ws && ls -la");
    }

    #[test]
    fn test_ensure_workspace_prefix_keeps_existing() {
        let cmd = ensure_workspace_prefix("cd /tmp/ws && ls -la", "/tmp/ws");
        assert_eq!(cmd, "cd /tmp/ws && ls -la");
    }

    #[test]
    fn test_ensure_workspace_prefix_other_cd_still_prefixed() {
        // 別ディレクトリへの cd は接頭辞として認めない
        let cmd = ensure_workspace_prefix("cd /etc && cat passwd", "/tmp/ws");
        assert!(cmd.starts_with("cd /tmp/ws && "));
    }

    #[test]
    fn test_error_fallback_command_shape() {
        let cmd = error_fallback_command("/tmp/ws");
        assert_eq!(cmd, "cd /tmp/ws && echo 'LLM error' > error.log");
        assert!(cmd.starts_with("cd /tmp/ws"));
    }
}
