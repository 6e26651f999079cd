//! 配線: 設定から標準アダプタで DecisionService を組み立てる

use crate::adapter::{FileCommandLog, ServiceConfig};
use crate::usecase::DecisionService;
use common::adapter::FileJsonLog;
use common::error::Error;
use common::llm::{CompletionProvider, MockProvider, OpenAiProvider};
use std::sync::Arc;

/// サンプリング温度（原系の挙動に合わせた固定値）
const TEMPERATURE: f64 = 0.8;
/// 出力トークン数の上限
const MAX_TOKENS: u32 = 150;

/// 配線: API キーの有無でプロバイダを選び、ファイルアダプタと
/// 合わせて DecisionService を組み立てる
pub fn wire(config: &ServiceConfig) -> Result<Arc<DecisionService>, Error> {
    let llm_enabled = config.api_key.is_some();
    let provider: Arc<dyn CompletionProvider> = match &config.api_key {
        Some(key) => Arc::new(OpenAiProvider::new(
            key.clone(),
            config.model.clone(),
            config.base_url.clone(),
            TEMPERATURE,
            MAX_TOKENS,
            config.timeout,
        )?),
        None => Arc::new(MockProvider::new(&config.workspace)),
    };
    let command_log = Arc::new(FileCommandLog::new(
        config.command_jsonl_path(),
        config.command_csv_path(),
    ));
    let log = Arc::new(FileJsonLog::new(config.service_log_path()));
    Ok(Arc::new(DecisionService::new(
        provider,
        llm_enabled,
        command_log,
        log,
        config.workspace.clone(),
        config.profile_path.clone(),
    )))
}
