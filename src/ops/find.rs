//! Recursive substring file search.

use std::path::{Path, PathBuf};

use crate::error::{FsnavError, Result};

use super::tree;
use super::validate::validate;

/// Outcome of a [`find`] search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    /// Matching files, sorted.
    pub matches: Vec<PathBuf>,

    /// Subdirectories that could not be read and were left out.
    pub skipped: Vec<PathBuf>,
}

/// Every file below `root` whose name contains `pattern`.
///
/// Matching is a case-sensitive substring test on the file name only, so
/// `.txt` matches `notes.txt` and `a.txt.bak` alike. Directories never match.
pub fn find(root: &Path, pattern: &str) -> Result<SearchResults> {
    validate(root)?;
    if !root.is_dir() {
        return Err(FsnavError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut results = SearchResults::default();
    let mut skipped = Vec::new();
    tree::walk_files(
        root,
        &mut |path| {
            let hit = path
                .file_name()
                .map(|name| name.to_string_lossy().contains(pattern))
                .unwrap_or(false);
            if hit {
                results.matches.push(path.to_path_buf());
            }
        },
        &mut |path, e| {
            tracing::debug!("Skipping {}: {}", path.display(), e);
            skipped.push(path.to_path_buf());
        },
    )
    .map_err(|e| FsnavError::io("search", root, e))?;

    results.matches.sort();
    skipped.sort();
    results.skipped = skipped;
    Ok(results)
}
