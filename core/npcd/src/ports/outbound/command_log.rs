//! コマンド決定記録の Outbound ポート
//!
//! 生成したコマンド 1 件ごとに CommandRecord を追記する。
//! 書き込み失敗はリクエスト処理を止めない（呼び出し側でログのみ）。

use crate::domain::CommandRecord;
use common::error::Error;

/// コマンド決定記録を追記する Outbound ポート
///
/// 実装は adapter::FileCommandLog（JSONL + CSV への追記）や
/// NoopCommandLog（テスト用）など。
pub trait CommandLog: Send + Sync {
    /// 1 レコードを追記する
    fn append(&self, record: &CommandRecord) -> Result<(), Error>;
}
