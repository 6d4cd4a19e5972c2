//! Persisted working directory.
//!
//! Each fsnav invocation is a fresh process, so the simulated current
//! directory is kept in a small JSON record (`path.json`) between runs.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FsnavError, Result};

/// File name of the working directory record.
pub const WORKING_DIR_FILE: &str = "path.json";

/// On-disk shape of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDirectoryRecord {
    /// The simulated current directory.
    pub cwd: String,
}

/// Loads and saves the [`WorkingDirectoryRecord`].
#[derive(Debug, Clone)]
pub struct WorkingDirectoryStore {
    path: PathBuf,
}

impl WorkingDirectoryStore {
    /// Create a store whose record lives in `state_dir`.
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(WORKING_DIR_FILE),
        }
    }

    /// Path of the record file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the working directory.
    ///
    /// Never fails. A missing record, a malformed record, or a record pointing
    /// at a directory that no longer exists all fall back to the process's
    /// real current directory.
    pub fn load(&self) -> PathBuf {
        match self.read_record() {
            Some(record) => {
                let cwd = PathBuf::from(&record.cwd);
                if cwd.is_dir() {
                    cwd
                } else {
                    tracing::warn!(
                        "Recorded working directory {} is gone, using process directory",
                        cwd.display()
                    );
                    Self::process_dir()
                }
            }
            None => Self::process_dir(),
        }
    }

    /// Overwrite the record with `cwd`.
    pub fn save(&self, cwd: &Path) -> Result<()> {
        let record = WorkingDirectoryRecord {
            cwd: cwd.to_string_lossy().to_string(),
        };
        let content = serde_json::to_string(&record)?;

        // Write to temp file, then rename
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &content)
            .map_err(|e| FsnavError::io("write", &temp_path, e))?;
        fs::rename(&temp_path, &self.path)
            .map_err(|e| FsnavError::io("write", &self.path, e))?;

        tracing::debug!("Saved working directory {}", cwd.display());
        Ok(())
    }

    fn read_record(&self) -> Option<WorkingDirectoryRecord> {
        let content = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Ignoring malformed {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn process_dir() -> PathBuf {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_without_record_uses_process_dir() {
        let temp = TempDir::new().unwrap();
        let store = WorkingDirectoryStore::new(temp.path());
        assert_eq!(store.load(), std::env::current_dir().unwrap());
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("sub");
        fs::create_dir(&target).unwrap();

        let store = WorkingDirectoryStore::new(temp.path());
        store.save(&target).unwrap();

        assert_eq!(store.load(), target);
    }

    #[test]
    fn record_is_json_with_cwd_key() {
        let temp = TempDir::new().unwrap();
        let store = WorkingDirectoryStore::new(temp.path());
        store.save(temp.path()).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["cwd"], &*temp.path().to_string_lossy());
    }

    #[test]
    fn malformed_record_falls_back() {
        let temp = TempDir::new().unwrap();
        let store = WorkingDirectoryStore::new(temp.path());
        fs::write(store.path(), "{not json").unwrap();

        assert_eq!(store.load(), std::env::current_dir().unwrap());
    }

    #[test]
    fn record_without_cwd_key_falls_back() {
        let temp = TempDir::new().unwrap();
        let store = WorkingDirectoryStore::new(temp.path());
        fs::write(store.path(), r#"{"other": "x"}"#).unwrap();

        assert_eq!(store.load(), std::env::current_dir().unwrap());
    }

    #[test]
    fn vanished_directory_falls_back() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("gone");
        fs::create_dir(&gone).unwrap();

        let store = WorkingDirectoryStore::new(temp.path());
        store.save(&gone).unwrap();
        fs::remove_dir(&gone).unwrap();

        assert_eq!(store.load(), std::env::current_dir().unwrap());
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let store = WorkingDirectoryStore::new(temp.path());
        store.save(temp.path()).unwrap();

        assert!(!temp.path().join("path.json.tmp").exists());
    }
}
