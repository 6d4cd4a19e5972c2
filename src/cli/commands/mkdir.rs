//! The `fsnav mkdir` command.

use crate::environment::Environment;
use crate::error::Result;
use crate::ops;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Creates a directory and its missing parents.
pub struct MakeDirCommand {
    path: String,
}

impl MakeDirCommand {
    /// Create a new mkdir command.
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

impl Command for MakeDirCommand {
    fn execute(&self, env: &mut Environment, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = env.resolve(&self.path);
        ops::make_dir(&path)?;
        tracing::debug!("Created {}", path.display());
        Ok(CommandResult::success())
    }
}
