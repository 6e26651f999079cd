//! ファイルへ JSONL で追記する Log 実装
//!
//! 追記専用。複数リクエストからの書き込みが混ざらないよう、
//! 1 ファイルにつき Mutex で直列化する。

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// ファイルへ JSONL を追記する Log 実装
pub struct FileJsonLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileJsonLog {
    /// ログファイルパスへ追記する logger を生成する。
    /// 親ディレクトリが無ければ書き込み時に作成する。
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }
}

impl Log for FileJsonLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let line = serde_json::to_string(record)?;
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| Error::io_msg("log write lock poisoned"))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut w = OpenOptions::new().create(true).append(true).open(&self.path)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
        w.flush()?;
        Ok(())
    }
}

/// 何も出力しない Log 実装（テスト用）
#[derive(Debug, Clone, Default)]
pub struct NoopLog;

impl Log for NoopLog {
    fn log(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{LogLevel, LogRecord};
    use tempfile::tempdir;

    #[test]
    fn test_noop_log() {
        let log = NoopLog;
        let rec = LogRecord::new(LogLevel::Info, "test", "ok");
        assert!(log.log(&rec).is_ok());
    }

    #[test]
    fn test_file_json_log_appends_one_line_per_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("service.jsonl");
        let log = FileJsonLog::new(&path);

        for i in 0..3 {
            let rec = LogRecord::new(LogLevel::Info, "test", format!("message {}", i));
            log.log(&rec).unwrap();
        }

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        for (i, line) in lines.iter().enumerate() {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(v["message"], format!("message {}", i));
        }
    }

    #[test]
    fn test_file_json_log_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/logs/service.jsonl");
        let log = FileJsonLog::new(&path);
        let rec = LogRecord::new(LogLevel::Warn, "test", "nested");
        log.log(&rec).unwrap();
        assert!(path.exists());
    }
}
