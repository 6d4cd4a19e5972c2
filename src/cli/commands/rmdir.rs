//! The `fsnav rmdir` command.

use crate::environment::Environment;
use crate::error::Result;
use crate::ops;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Removes an empty directory.
pub struct RemoveDirCommand {
    path: String,
}

impl RemoveDirCommand {
    /// Create a new rmdir command.
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

impl Command for RemoveDirCommand {
    fn execute(&self, env: &mut Environment, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = env.resolve(&self.path);
        ops::remove_empty_dir(&path)?;
        ui.success(&format!(
            "Empty directory '{}' removed successfully.",
            path.display()
        ));
        Ok(CommandResult::success())
    }
}
