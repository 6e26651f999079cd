//! npcd 共通ライブラリ
//!
//! サービス本体（`npcd`）から使う共有機能を提供します。
//! エラー型・補完プロバイダ・構造化ログのポートとアダプタを含みます。

/// エラーハンドリング
pub mod error;

/// 補完プロバイダ（OpenAI 互換 / モック）
pub mod llm;

/// Outbound ポート（構造化ログ等）
pub mod ports;

/// 標準アダプタ（ファイル JSONL ログ等）
pub mod adapter;
