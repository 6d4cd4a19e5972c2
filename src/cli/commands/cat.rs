//! The `fsnav cat` command.

use crate::environment::Environment;
use crate::error::Result;
use crate::ops;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Prints the contents of a text file.
pub struct CatCommand {
    file: String,
}

impl CatCommand {
    /// Create a new cat command.
    pub fn new(file: &str) -> Self {
        Self {
            file: file.to_string(),
        }
    }
}

impl Command for CatCommand {
    fn execute(&self, env: &mut Environment, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = env.resolve(&self.file);
        let content = ops::read(&path)?;
        ui.message(content.strip_suffix('\n').unwrap_or(&content));
        Ok(CommandResult::success())
    }
}
