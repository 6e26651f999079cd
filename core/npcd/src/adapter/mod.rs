//! アダプタ層（ファイル・環境変数との接続）

pub mod command_log;
pub mod env;
pub mod profile_loader;

pub use command_log::{FileCommandLog, NoopCommandLog};
pub use env::ServiceConfig;
pub use profile_loader::load_profile;
