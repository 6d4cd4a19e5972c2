//! The `fsnav logs` command.

use crate::environment::Environment;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Prints the audit log.
pub struct LogsCommand;

impl Command for LogsCommand {
    fn execute(&self, env: &mut Environment, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match env.audit().read()? {
            Some(content) => ui.message(content.strip_suffix('\n').unwrap_or(&content)),
            None => ui.message("No logs available."),
        }
        Ok(CommandResult::success())
    }
}
