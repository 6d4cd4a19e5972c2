//! Directory operations: list, create, remove.

use std::fs;
use std::path::Path;

use crate::error::{FsnavError, Result};

use super::validate::{validate, validate_creatable};

/// Names of the entries directly inside `path`, sorted.
///
/// Names starting with `.` are hidden unless `show_hidden` is set. A file
/// path lists just its own name.
pub fn list(path: &Path, show_hidden: bool) -> Result<Vec<String>> {
    validate(path)?;

    if !path.is_dir() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        return Ok(vec![name]);
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(path).map_err(|e| FsnavError::io("list", path, e))? {
        let entry = entry.map_err(|e| FsnavError::io("list", path, e))?;
        let name = entry.file_name().to_string_lossy().to_string();
        if show_hidden || !name.starts_with('.') {
            names.push(name);
        }
    }
    names.sort();

    Ok(names)
}

/// Create `path` and any missing parents. Existing directories are fine.
pub fn make_dir(path: &Path) -> Result<()> {
    validate_creatable(path)?;
    fs::create_dir_all(path).map_err(|e| FsnavError::io("create directory", path, e))
}

/// Remove an empty directory.
pub fn remove_empty_dir(path: &Path) -> Result<()> {
    validate(path)?;
    if !path.is_dir() {
        return Err(FsnavError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    fs::remove_dir(path).map_err(|e| FsnavError::io("remove empty directory", path, e))
}

/// Remove a directory and everything below it.
pub fn remove_tree(path: &Path) -> Result<()> {
    validate(path)?;
    if !path.is_dir() {
        return Err(FsnavError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    fs::remove_dir_all(path).map_err(|e| FsnavError::io("remove directory", path, e))
}
