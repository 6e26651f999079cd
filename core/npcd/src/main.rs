//! npcd: NPC コマンド決定サービス
//!
//! プロファイルと直近履歴からシェルコマンドを 1 件生成する
//! HTTP マイクロサービス。API キー未設定時はモックモードで動く。

mod adapter;
mod domain;
mod http;
mod ports;
mod prompt;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use adapter::ServiceConfig;
use anyhow::Context;
use usecase::DecisionService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::from_env();
    let service = wiring::wire(&config)?;

    // 起動時に一度だけ読む。失敗は警告のみ（既定値で継続）。
    let _ = service.reload_profile().await;

    print_banner(&config, &service).await;
    service.log_startup(&config.addr);

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;
    axum::serve(listener, http::router(service))
        .await
        .context("HTTP server terminated")?;
    Ok(())
}

async fn print_banner(config: &ServiceConfig, service: &DecisionService) {
    let health = service.health().await;
    println!("{}", "=".repeat(50));
    println!("  NPC Decision Service");
    println!("{}", "=".repeat(50));
    println!("LLM Enabled: {}", health.llm_enabled);
    println!("NPC Profile: {}", health.npc_name);
    println!("Workspace: {}/", config.workspace);
    println!("Listening on: http://{}", config.addr);
    println!("Endpoints:");
    println!("  GET  /health - Health check");
    println!("  GET  /next-command - Get next command");
    println!("  POST /next-command - Get next command with context");
    println!("  POST /reload-npc - Reload NPC profile");
    println!("  GET  /history - View action history");
    println!("{}", "=".repeat(50));
}
