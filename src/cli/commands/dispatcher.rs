//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing and audit logging

use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use crate::cli::invocation::Invocation;
use crate::environment::Environment;
use crate::error::{FsnavError, Result};
use crate::state::AuditStatus;
use crate::ui::UserInterface;

use super::cat::CatCommand;
use super::cd::ChangeDirCommand;
use super::cp::CopyCommand;
use super::find::FindCommand;
use super::logs::LogsCommand;
use super::ls::ListCommand;
use super::mkdir::MakeDirCommand;
use super::mv::MoveCommand;
use super::rm::{RemoveFileCommand, RemoveTreeCommand};
use super::rmdir::RemoveDirCommand;

/// Trait for command implementations.
///
/// Each command receives the per-invocation [`Environment`] explicitly; no
/// command touches the state files any other way.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `env` - Working directory and audit log for this invocation
    /// * `ui` - User interface for displaying output
    fn execute(&self, env: &mut Environment, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Exit code for an unrecognized command name.
    pub const USAGE_EXIT_CODE: i32 = 2;

    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI invocations to their implementations.
pub struct CommandDispatcher {
    state_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a dispatcher whose state files live in `state_dir`.
    pub fn new(state_dir: PathBuf) -> Self {
        Self { state_dir }
    }

    /// Get the state directory.
    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    /// Load the environment and dispatch.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> CommandResult {
        let mut env = Environment::load(&self.state_dir);
        Self::dispatch_in(cli, &mut env, ui)
    }

    /// Dispatch within an already loaded environment.
    ///
    /// Never fails: every error is printed and recorded in the audit log.
    /// An unrecognized command writes an `Error` entry followed by a
    /// `Success` entry, which keeps existing audit trails consistent.
    pub fn dispatch_in(
        cli: &Cli,
        env: &mut Environment,
        ui: &mut dyn UserInterface,
    ) -> CommandResult {
        let invocation = match Invocation::from_cli(cli) {
            Ok(invocation) => invocation,
            Err(FsnavError::UnknownCommand { name }) => {
                tracing::debug!("Unknown command '{}'", name);
                env.record(&name, AuditStatus::Error, Some("Invalid command"));
                ui.error("Invalid Command!");
                env.record(&name, AuditStatus::Success, None);
                return CommandResult::failure(CommandResult::USAGE_EXIT_CODE);
            }
            Err(e) => return Self::fail(&cli.command, &e, env, ui),
        };

        match Self::run(&invocation, env, ui) {
            Ok(result) => {
                env.record(invocation.name(), AuditStatus::Success, None);
                result
            }
            Err(e) => Self::fail(invocation.name(), &e, env, ui),
        }
    }

    fn run(
        invocation: &Invocation,
        env: &mut Environment,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match invocation {
            Invocation::List { path, all } => ListCommand::new(path, *all).execute(env, ui),
            Invocation::MakeDir { path } => MakeDirCommand::new(path).execute(env, ui),
            Invocation::ChangeDir { path } => ChangeDirCommand::new(path).execute(env, ui),
            Invocation::RemoveDir { path } => RemoveDirCommand::new(path).execute(env, ui),
            Invocation::RemoveFile { path } => RemoveFileCommand::new(path).execute(env, ui),
            Invocation::RemoveTree { target } => RemoveTreeCommand::new(target).execute(env, ui),
            Invocation::Copy {
                source,
                destination,
            } => CopyCommand::new(source, destination).execute(env, ui),
            Invocation::Move {
                source,
                destination,
            } => MoveCommand::new(source, destination).execute(env, ui),
            Invocation::Find { path, pattern } => FindCommand::new(path, pattern).execute(env, ui),
            Invocation::Cat { file } => CatCommand::new(file).execute(env, ui),
            Invocation::Logs => LogsCommand.execute(env, ui),
        }
    }

    fn fail(
        command: &str,
        error: &FsnavError,
        env: &mut Environment,
        ui: &mut dyn UserInterface,
    ) -> CommandResult {
        tracing::debug!("{} failed ({:?}): {}", command, error.kind(), error);
        ui.error(&format!("Error: {}", error));
        env.record(command, AuditStatus::Error, Some(&error.to_string()));
        CommandResult::failure(1)
    }
}
