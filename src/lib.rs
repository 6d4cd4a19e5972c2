//! fsnav - File manipulation and directory navigation from the command line.
//!
//! Each invocation runs one command (`ls`, `cd`, `mkdir`, `rmdir`, `rm`,
//! `cp`, `mv`, `find`, `cat`, `logs`) against a simulated working directory
//! that persists between runs, and appends the outcome to an audit log.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, argument parsing and dispatch
//! - [`environment`] - Per-invocation context and path resolution
//! - [`error`] - Error types and result aliases
//! - [`ops`] - Filesystem operations
//! - [`state`] - Working directory record and audit log
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use fsnav::environment::Environment;
//! use fsnav::ops;
//!
//! let temp = tempfile::TempDir::new().unwrap();
//! let mut env = Environment::load(temp.path());
//! env.set_cwd(temp.path().to_path_buf()).unwrap();
//!
//! ops::make_dir(&env.resolve("a/b/c")).unwrap();
//! assert_eq!(ops::list(&env.resolve("a/b"), false).unwrap(), vec!["c"]);
//! ```

pub mod cli;
pub mod environment;
pub mod error;
pub mod ops;
pub mod state;
pub mod ui;

pub use error::{FsnavError, Result};
