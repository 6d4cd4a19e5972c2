//! Per-invocation environment.
//!
//! The [`Environment`] is built once from disk at startup and passed to
//! every command. It owns the working directory loaded from the
//! [`WorkingDirectoryStore`] and the [`AuditLog`], and it is the only place
//! that writes either back.

pub mod resolver;

pub use resolver::{normalize, resolve};

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::state::{AuditLog, AuditStatus, WorkingDirectoryStore};

/// Context threaded through every command.
#[derive(Debug, Clone)]
pub struct Environment {
    cwd: PathBuf,
    store: WorkingDirectoryStore,
    audit: AuditLog,
}

impl Environment {
    /// Load the environment whose state files live in `state_dir`.
    pub fn load(state_dir: &Path) -> Self {
        let store = WorkingDirectoryStore::new(state_dir);
        let cwd = store.load();
        tracing::debug!("Working directory: {}", cwd.display());

        Self {
            cwd,
            store,
            audit: AuditLog::new(state_dir),
        }
    }

    /// The simulated working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Resolve a user-supplied path against the working directory.
    pub fn resolve(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }

    /// Change the working directory and persist it.
    pub fn set_cwd(&mut self, cwd: PathBuf) -> Result<()> {
        self.store.save(&cwd)?;
        self.cwd = cwd;
        Ok(())
    }

    /// The audit log.
    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    /// Append an audit entry, downgrading write failures to a warning.
    pub fn record(&self, command: &str, status: AuditStatus, message: Option<&str>) {
        if let Err(e) = self.audit.append(command, status, message) {
            tracing::warn!("Failed to write audit log: {}", e);
        }
    }
}
