//! エラーハンドリング
//!
//! サービス全体で使うエラー型。カテゴリごとのコンストラクタを用意し、
//! 呼び出し側では `Error::http(...)` のように生成する。

use thiserror::Error;

/// サービス共通のエラー型
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP 通信エラー（接続失敗・タイムアウト・上流 API のエラー応答）
    #[error("http error: {0}")]
    Http(String),

    /// JSON のシリアライズ / デシリアライズ失敗
    #[error("json error: {0}")]
    Json(String),

    /// ファイル I/O エラー
    #[error("io error: {0}")]
    Io(String),

    /// 設定の不備（不正な値・解決不能なパス等）
    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP エラーを生成
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// JSON エラーを生成
    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    /// I/O エラーを生成
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// 設定エラーを生成
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
