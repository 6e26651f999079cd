//! 標準アダプタ

pub mod file_json_log;

pub use file_json_log::{FileJsonLog, NoopLog};
