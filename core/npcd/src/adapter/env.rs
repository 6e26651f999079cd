//! 環境変数による設定取得（adapter 層）
//!
//! usecase は環境変数に直接依存せず、起動時に解決した ServiceConfig を
//! 受け取る。API キーの有無がモックモードの分岐点になる。

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// 上流 API のタイムアウト既定値（秒）
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 起動時に環境変数から解決するサービス設定
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// バインドアドレス（NPCD_ADDR）
    pub addr: String,
    /// NPC プロファイル JSON のパス（NPCD_PROFILE）
    pub profile_path: PathBuf,
    /// 追記ログの出力ディレクトリ（NPCD_LOG_DIR）
    pub log_dir: PathBuf,
    /// 生成コマンドの固定ワークスペース（NPCD_WORKSPACE）
    pub workspace: String,
    /// 上流 API キー。未設定ならモックモード（OPENAI_API_KEY）
    pub api_key: Option<String>,
    /// モデル名（NPCD_MODEL、未設定ならプロバイダの既定値）
    pub model: Option<String>,
    /// OpenAI 互換 API のベース URL（NPCD_BASE_URL）
    pub base_url: Option<String>,
    /// 上流リクエストのタイムアウト（NPCD_LLM_TIMEOUT_SECS）
    pub timeout: Duration,
}

impl ServiceConfig {
    /// 環境変数から設定を解決する。未設定の項目は既定値。
    pub fn from_env() -> Self {
        let timeout_secs = env::var("NPCD_LLM_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self {
            addr: env_or("NPCD_ADDR", "0.0.0.0:5555"),
            profile_path: PathBuf::from(env_or("NPCD_PROFILE", "npc_profiles/current_npc.json")),
            log_dir: PathBuf::from(env_or("NPCD_LOG_DIR", "logs")),
            workspace: env_or("NPCD_WORKSPACE", "/tmp/npc_workspace"),
            api_key: env::var("OPENAI_API_KEY").ok().filter(|s| !s.is_empty()),
            model: env::var("NPCD_MODEL").ok().filter(|s| !s.is_empty()),
            base_url: env::var("NPCD_BASE_URL").ok().filter(|s| !s.is_empty()),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// コマンド記録 JSONL のパス
    pub fn command_jsonl_path(&self) -> PathBuf {
        self.log_dir.join("command_history.jsonl")
    }

    /// コマンド記録 CSV のパス
    pub fn command_csv_path(&self) -> PathBuf {
        self.log_dir.join("command_history.csv")
    }

    /// サービスの構造化ログ（JSONL）のパス
    pub fn service_log_path(&self) -> PathBuf {
        self.log_dir.join("service.jsonl")
    }
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}
