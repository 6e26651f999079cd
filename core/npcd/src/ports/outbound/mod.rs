//! Outbound ポート: 決定記録の永続化

pub mod command_log;

pub use command_log::CommandLog;
