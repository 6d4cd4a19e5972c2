//! The `fsnav ls` command.

use crate::environment::Environment;
use crate::error::Result;
use crate::ops;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Lists the entries of a directory.
pub struct ListCommand {
    path: String,
    all: bool,
}

impl ListCommand {
    /// Create a new ls command.
    pub fn new(path: &str, all: bool) -> Self {
        Self {
            path: path.to_string(),
            all,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, env: &mut Environment, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = env.resolve(&self.path);
        for name in ops::list(&path, self.all)? {
            ui.message(&name);
        }
        Ok(CommandResult::success())
    }
}
