//! The `fsnav mv` command.

use crate::environment::Environment;
use crate::error::Result;
use crate::ops;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Moves or renames a file or directory.
pub struct MoveCommand {
    source: String,
    destination: String,
}

impl MoveCommand {
    /// Create a new mv command.
    pub fn new(source: &str, destination: &str) -> Self {
        Self {
            source: source.to_string(),
            destination: destination.to_string(),
        }
    }
}

impl Command for MoveCommand {
    fn execute(&self, env: &mut Environment, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let source = env.resolve(&self.source);
        let destination = env.resolve(&self.destination);

        let target = ops::move_path(&source, &destination)?;
        ui.success(&format!(
            "Moved '{}' to '{}'.",
            source.display(),
            target.display()
        ));
        Ok(CommandResult::success())
    }
}
