//! Command-line interface for fsnav.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Raw argument definitions using clap derive macros
//! - [`invocation`] - Typed, validated command built from the raw arguments
//! - [`commands`] - Command implementations and the dispatcher

pub mod args;
pub mod commands;
pub mod invocation;

pub use args::Cli;
pub use commands::{Command, CommandDispatcher, CommandResult};
pub use invocation::Invocation;
