//! OpenAI Chat Completions 互換 (/chat/completions) プロバイダ
//!
//! base_url で任意の互換エンドポイントを指定可能。ペイロード生成と
//! レスポンス解析は純関数に分離し、ネットワークなしでテストできる。

use crate::error::Error;
use crate::llm::provider::CompletionProvider;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI Chat Completions 互換プロバイダ
pub struct OpenAiProvider {
    model: String,
    base_url: String,
    api_key: String,
    temperature: f64,
    max_tokens: u32,
    client: reqwest::Client,
}

impl OpenAiProvider {
    /// 新しいプロバイダを作成
    ///
    /// # Arguments
    /// * `api_key` - Bearer 認証に使う API キー
    /// * `model` - モデル名（None のとき "gpt-4o-mini"）
    /// * `base_url` - ベース URL（None のとき DEFAULT_BASE_URL）
    /// * `temperature` - 温度
    /// * `max_tokens` - 出力トークン数の上限
    /// * `timeout` - リクエスト全体のタイムアウト
    pub fn new(
        api_key: impl Into<String>,
        model: Option<String>,
        base_url: Option<String>,
        temperature: f64,
        max_tokens: u32,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            model,
            base_url,
            api_key: api_key.into(),
            temperature,
            max_tokens,
            client,
        })
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// リクエストペイロードを生成（system + user の 2 メッセージ）
    pub fn make_request_payload(&self, system_instruction: &str, user_message: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_instruction },
                { "role": "user", "content": user_message }
            ],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        })
    }

    /// レスポンス JSON から先頭 choice のテキストを抽出
    ///
    /// `error` フィールドがあれば API エラーとして扱う。content が
    /// 無い・null のレスポンスは malformed としてエラーにする。
    pub fn parse_response_text(&self, response_json: &str) -> Result<String, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(err) = v.get("error") {
            let msg = err["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("API error: {}", msg)));
        }

        v["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.trim().to_string())
            .ok_or_else(|| Error::http("Malformed response: no message content".to_string()))
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(
        &self,
        system_instruction: &str,
        user_message: &str,
    ) -> Result<String, Error> {
        let payload = self.make_request_payload(system_instruction, user_message);

        let response = self
            .client
            .post(self.url())
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let error_msg = if let Ok(v) = serde_json::from_str::<Value>(&response_text) {
                v["error"]["message"]
                    .as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text))
            } else {
                format!("HTTP {}: {}", status, response_text)
            };
            return Err(Error::http(format!("Chat completions error: {}", error_msg)));
        }

        self.parse_response_text(&response_text)
    }
}
