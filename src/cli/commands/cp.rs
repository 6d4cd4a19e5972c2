//! The `fsnav cp` command.

use crate::environment::Environment;
use crate::error::Result;
use crate::ops::{self, CopyKind};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Copies a file or a directory tree.
pub struct CopyCommand {
    source: String,
    destination: String,
}

impl CopyCommand {
    /// Create a new cp command.
    pub fn new(source: &str, destination: &str) -> Self {
        Self {
            source: source.to_string(),
            destination: destination.to_string(),
        }
    }
}

impl Command for CopyCommand {
    fn execute(&self, env: &mut Environment, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let source = env.resolve(&self.source);
        let destination = env.resolve(&self.destination);

        let outcome = ops::copy(&source, &destination)?;
        let label = match outcome.kind {
            CopyKind::File => "File",
            CopyKind::Directory => "Directory",
        };
        ui.success(&format!(
            "{} '{}' copied to '{}'.",
            label,
            source.display(),
            outcome.destination.display()
        ));
        Ok(CommandResult::success())
    }
}
