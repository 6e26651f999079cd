//! HTTP サーフェス（JSON ボディの薄いマッピング）
//!
//! ルーティングと応答整形のみを担い、判断はすべて
//! usecase::DecisionService に委譲する。

use crate::usecase::DecisionService;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Local;
use common::error::Error;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// 全ハンドラで共有するサービス
pub type SharedService = Arc<DecisionService>;

/// ルーターを組み立てる
pub fn router(service: SharedService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/next-command", get(next_command_get).post(next_command_post))
        .route("/reload-npc", post(reload_npc))
        .route("/history", get(history))
        .with_state(service)
}

/// `GET|POST /next-command` のリクエストボディ（両フィールド任意）
#[derive(Debug, Clone, Default, Deserialize)]
struct NextCommandRequest {
    #[serde(default)]
    context: Option<String>,
    #[serde(default)]
    last_command: Option<String>,
}

/// GET /health
async fn health(State(svc): State<SharedService>) -> Json<Value> {
    let h = svc.health().await;
    Json(json!({
        "status": "healthy",
        "llm_enabled": h.llm_enabled,
        "npc_loaded": h.npc_loaded,
        "npc_name": h.npc_name,
        "timestamp": Local::now().to_rfc3339(),
    }))
}

/// GET /next-command（ボディなし）
async fn next_command_get(State(svc): State<SharedService>) -> Response {
    respond_next(svc, NextCommandRequest::default()).await
}

/// POST /next-command（任意の JSON ボディ付き）
async fn next_command_post(
    State(svc): State<SharedService>,
    body: Option<Json<NextCommandRequest>>,
) -> Response {
    let req = body.map(|Json(b)| b).unwrap_or_default();
    respond_next(svc, req).await
}

async fn respond_next(svc: SharedService, req: NextCommandRequest) -> Response {
    match svc
        .next_command(req.last_command.as_deref(), req.context.as_deref())
        .await
    {
        Ok(d) => Json(json!({
            "success": true,
            "command": d.command,
            "npc": d.npc_name,
            "timestamp": d.timestamp,
        }))
        .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(internal_error_body(svc.workspace(), &e)),
        )
            .into_response(),
    }
}

/// POST /reload-npc
///
/// 読み込み失敗は usecase 側で警告記録済みで、現行プロファイルが
/// 維持されるため応答は常に success とする。
async fn reload_npc(State(svc): State<SharedService>) -> Json<Value> {
    let _ = svc.reload_profile().await;
    Json(json!({
        "success": true,
        "npc_name": svc.npc_name().await,
        "message": "NPC profile reloaded",
    }))
}

/// GET /history
async fn history(State(svc): State<SharedService>) -> Json<Value> {
    let entries = svc.history_snapshot().await;
    Json(json!({
        "count": entries.len(),
        "history": entries,
    }))
}

/// 500 応答のボディ（汎用フォールバックコマンド付き）
fn internal_error_body(workspace: &str, error: &Error) -> Value {
    json!({
        "success": false,
        "error": error.to_string(),
        "command": format!("cd {} && echo 'Service error'", workspace),
    })
}
