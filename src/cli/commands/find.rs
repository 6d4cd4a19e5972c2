//! The `fsnav find` command.

use crate::environment::Environment;
use crate::error::Result;
use crate::ops;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Searches a tree for file names containing a pattern.
pub struct FindCommand {
    path: String,
    pattern: String,
}

impl FindCommand {
    /// Create a new find command.
    pub fn new(path: &str, pattern: &str) -> Self {
        Self {
            path: path.to_string(),
            pattern: pattern.to_string(),
        }
    }
}

impl Command for FindCommand {
    fn execute(&self, env: &mut Environment, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = env.resolve(&self.path);
        tracing::debug!("Searching {} for '{}'", root.display(), self.pattern);

        let results = ops::find(&root, &self.pattern)?;
        for dir in &results.skipped {
            ui.warning(&format!("Skipped unreadable directory '{}'", dir.display()));
        }

        let matches = results.matches;
        if matches.is_empty() {
            ui.message(&format!(
                "No files matching the pattern '{}' found.",
                self.pattern
            ));
            return Ok(CommandResult::success());
        }

        ui.header("Matching files:");
        for path in matches {
            ui.message(&path.display().to_string());
        }
        Ok(CommandResult::success())
    }
}
