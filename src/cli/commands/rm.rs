//! The `fsnav rm` command.
//!
//! `rm <path>` removes one file; `rm -r <target>` removes a whole tree.

use crate::environment::Environment;
use crate::error::Result;
use crate::ops;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Removes a single file.
pub struct RemoveFileCommand {
    path: String,
}

impl RemoveFileCommand {
    /// Create a new rm command.
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

impl Command for RemoveFileCommand {
    fn execute(&self, env: &mut Environment, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = env.resolve(&self.path);
        ops::remove_file(&path)?;
        ui.success(&format!("File '{}' removed successfully.", path.display()));
        Ok(CommandResult::success())
    }
}

/// Removes a directory and all its contents.
pub struct RemoveTreeCommand {
    target: String,
}

impl RemoveTreeCommand {
    /// Create a new rm -r command.
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
        }
    }
}

impl Command for RemoveTreeCommand {
    fn execute(&self, env: &mut Environment, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = env.resolve(&self.target);
        ops::remove_tree(&path)?;
        ui.success(&format!(
            "Directory '{}' and its contents removed recursively.",
            path.display()
        ));
        Ok(CommandResult::success())
    }
}
