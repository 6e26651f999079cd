//! モックプロバイダ
//!
//! API キーが未設定のときに使う。ネットワークを一切使わず、
//! ワークスペース接頭辞付きの固定コマンド 3 種からランダムに返す。

use crate::error::Error;
use crate::llm::provider::CompletionProvider;
use async_trait::async_trait;
use rand::seq::SliceRandom;

/// モックプロバイダ（ネットワーク不要）
pub struct MockProvider {
    commands: Vec<String>,
}

impl MockProvider {
    /// ワークスペースパスから固定コマンド集合を組み立てる
    pub fn new(workspace: &str) -> Self {
        let commands = vec![
            format!(
                "cd {} && mkdir -p documents && echo 'Mock mode active' > documents/readme.txt",
                workspace
            ),
            format!("cd {} && ls -lah", workspace),
            format!("cd {} && date > timestamp.txt", workspace),
        ];
        Self { commands }
    }

    /// 固定コマンド集合（テスト・検証用）
    pub fn commands(&self) -> &[String] {
        &self.commands
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock"
    }

    async fn complete(
        &self,
        _system_instruction: &str,
        _user_message: &str,
    ) -> Result<String, Error> {
        self.commands
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| Error::config("mock provider has no commands"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_name_and_model() {
        let p = MockProvider::new("/tmp/ws");
        assert_eq!(p.name(), "mock");
        assert_eq!(p.model(), "mock");
    }

    #[test]
    fn test_mock_commands_carry_workspace_prefix() {
        let p = MockProvider::new("/tmp/ws");
        assert_eq!(p.commands().len(), 3);
        for cmd in p.commands() {
            assert!(cmd.starts_with("cd /tmp/ws"), "unexpected command: {}", cmd);
        }
    }

    #[tokio::test]
    async fn test_mock_complete_returns_one_of_fixed_commands() {
        let p = MockProvider::new("/tmp/ws");
        for _ in 0..20 {
            let cmd = p.complete("system", "user").await.unwrap();
            assert!(p.commands().contains(&cmd));
        }
    }
}
