//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which turns the raw
//! arguments into an [`Invocation`](crate::cli::Invocation), routes it to its
//! implementation, and records the outcome in the audit log.

pub mod cat;
pub mod cd;
pub mod cp;
pub mod dispatcher;
pub mod find;
pub mod logs;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod rm;
pub mod rmdir;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
