//! Outbound ポート: 外界（ログファイル等）へ書き出すための trait

pub mod log;

pub use log::{now_iso8601, Log, LogLevel, LogRecord};
