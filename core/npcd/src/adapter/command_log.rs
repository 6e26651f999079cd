//! コマンド決定記録のファイルアダプタ（JSONL + CSV）
//!
//! JSONL は 1 レコード 1 行の追記。CSV はファイル新規作成時のみ
//! ヘッダ行を書き、以後は固定の列順で 1 行ずつ追記する。
//! 2 ファイルへの書き込みは Mutex で直列化する。

use crate::domain::CommandRecord;
use crate::ports::outbound::CommandLog;
use common::error::Error;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// CSV のヘッダ行（列順はこの並びで固定）
pub const CSV_HEADER: &str =
    "timestamp,npc_name,npc_role,command,working_directory,delay_after,llm_model,session_id";

/// JSONL と CSV の両方へ追記する CommandLog 実装
pub struct FileCommandLog {
    jsonl_path: PathBuf,
    csv_path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileCommandLog {
    pub fn new(jsonl_path: impl AsRef<Path>, csv_path: impl AsRef<Path>) -> Self {
        Self {
            jsonl_path: jsonl_path.as_ref().to_path_buf(),
            csv_path: csv_path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    fn ensure_parent(path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    fn append_jsonl(&self, record: &CommandRecord) -> Result<(), Error> {
        Self::ensure_parent(&self.jsonl_path)?;
        let line = serde_json::to_string(record)?;
        let mut w = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.jsonl_path)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
        w.flush()?;
        Ok(())
    }

    fn append_csv(&self, record: &CommandRecord) -> Result<(), Error> {
        Self::ensure_parent(&self.csv_path)?;
        // ヘッダはファイルが存在しない初回のみ
        let needs_header = !self.csv_path.exists();
        let mut w = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.csv_path)?;
        if needs_header {
            w.write_all(CSV_HEADER.as_bytes())?;
            w.write_all(b"\n")?;
        }
        w.write_all(csv_row(record).as_bytes())?;
        w.write_all(b"\n")?;
        w.flush()?;
        Ok(())
    }
}

impl CommandLog for FileCommandLog {
    fn append(&self, record: &CommandRecord) -> Result<(), Error> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| Error::io_msg("command log write lock poisoned"))?;
        self.append_jsonl(record)?;
        self.append_csv(record)?;
        Ok(())
    }
}

/// 何も書き込まない CommandLog 実装（テスト用）
#[derive(Debug, Clone, Default)]
pub struct NoopCommandLog;

impl CommandLog for NoopCommandLog {
    fn append(&self, _record: &CommandRecord) -> Result<(), Error> {
        Ok(())
    }
}

/// CSV の 1 行を固定の列順で組み立てる
fn csv_row(record: &CommandRecord) -> String {
    [
        csv_escape(&record.timestamp),
        csv_escape(&record.npc_name),
        csv_escape(&record.npc_role),
        csv_escape(&record.command),
        csv_escape(&record.working_directory),
        record.delay_after.to_string(),
        csv_escape(&record.llm_model),
        csv_escape(&record.session_id),
    ]
    .join(",")
}

/// カンマ・引用符・改行を含むフィールドを引用する
fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
