//! Process-spanning state.
//!
//! fsnav keeps two files in its state directory: the working directory
//! record and the audit log.

pub mod audit;
pub mod working_dir;

pub use audit::{AuditEntry, AuditLog, AuditStatus, LOG_FILE};
pub use working_dir::{WorkingDirectoryRecord, WorkingDirectoryStore, WORKING_DIR_FILE};
