//! The `fsnav cd` command.
//!
//! Changes the persisted working directory. The record is only written once
//! the target has been validated as a readable directory.

use crate::environment::Environment;
use crate::error::{FsnavError, Result};
use crate::ops;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Changes the working directory.
pub struct ChangeDirCommand {
    path: String,
}

impl ChangeDirCommand {
    /// Create a new cd command.
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }
}

impl Command for ChangeDirCommand {
    fn execute(&self, env: &mut Environment, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let target = env.resolve(&self.path);
        ops::validate(&target)?;
        if !target.is_dir() {
            return Err(FsnavError::NotADirectory { path: target });
        }

        env.set_cwd(target)?;
        ui.message(&env.cwd().display().to_string());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn cd_persists_new_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();

        let mut env = Environment::load(temp.path());
        env.set_cwd(temp.path().to_path_buf()).unwrap();
        let mut ui = MockUI::new();

        ChangeDirCommand::new("sub")
            .execute(&mut env, &mut ui)
            .unwrap();

        assert_eq!(Environment::load(temp.path()).cwd(), temp.path().join("sub"));
    }

    #[test]
    fn cd_to_missing_path_keeps_record() {
        let temp = TempDir::new().unwrap();
        let mut env = Environment::load(temp.path());
        env.set_cwd(temp.path().to_path_buf()).unwrap();
        let mut ui = MockUI::new();

        let err = ChangeDirCommand::new("nope")
            .execute(&mut env, &mut ui)
            .unwrap_err();

        assert!(matches!(err, FsnavError::PathNotFound { .. }));
        assert_eq!(env.cwd(), temp.path());
        assert_eq!(Environment::load(temp.path()).cwd(), temp.path());
    }

    #[test]
    fn cd_to_file_is_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("f.txt"), "").unwrap();
        let mut env = Environment::load(temp.path());
        env.set_cwd(temp.path().to_path_buf()).unwrap();
        let mut ui = MockUI::new();

        let err = ChangeDirCommand::new("f.txt")
            .execute(&mut env, &mut ui)
            .unwrap_err();
        assert!(matches!(err, FsnavError::NotADirectory { .. }));
        assert_eq!(Environment::load(temp.path()).cwd(), temp.path());
    }
}
