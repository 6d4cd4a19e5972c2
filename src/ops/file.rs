//! File operations: remove, copy, move, read.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{FsnavError, Result};

use super::tree;
use super::validate::validate;

/// What a copy produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyKind {
    File,
    Directory,
}

/// Result of [`copy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutcome {
    /// Whether a file or a whole tree was copied.
    pub kind: CopyKind,

    /// Final path of the copy.
    pub destination: PathBuf,
}

/// Remove a single file. Directories are refused.
pub fn remove_file(path: &Path) -> Result<()> {
    validate(path)?;

    let metadata = fs::symlink_metadata(path).map_err(|e| FsnavError::io("remove file", path, e))?;
    if metadata.is_dir() {
        return Err(FsnavError::IsADirectory {
            path: path.to_path_buf(),
        });
    }

    fs::remove_file(path).map_err(|e| FsnavError::io("remove file", path, e))
}

/// Copy `src` to `dst`.
///
/// A directory is copied as a whole tree and `dst` must not exist. A file
/// overwrites `dst`, or lands inside it when `dst` is an existing directory.
/// Copying a file onto itself (or a hard link of itself) is refused.
pub fn copy(src: &Path, dst: &Path) -> Result<CopyOutcome> {
    validate(src)?;

    if src.is_dir() {
        if dst.exists() {
            return Err(FsnavError::DestinationExists {
                path: dst.to_path_buf(),
            });
        }
        if dst.starts_with(src) {
            return Err(FsnavError::transfer(
                "copy",
                src,
                dst,
                std::io::Error::new(
                    ErrorKind::InvalidInput,
                    "cannot copy a directory into itself",
                ),
            ));
        }
        tree::copy_tree(src, dst).map_err(|e| FsnavError::transfer("copy", src, dst, e))?;
        return Ok(CopyOutcome {
            kind: CopyKind::Directory,
            destination: dst.to_path_buf(),
        });
    }

    let target = into_dir(src, dst);
    if same_file(src, &target) {
        return Err(FsnavError::transfer(
            "copy",
            src,
            &target,
            std::io::Error::new(
                ErrorKind::InvalidInput,
                "source and destination are the same file",
            ),
        ));
    }
    tree::copy_file(src, &target).map_err(|e| FsnavError::transfer("copy", src, &target, e))?;

    Ok(CopyOutcome {
        kind: CopyKind::File,
        destination: target,
    })
}

/// Move or rename `src` to `dst`, returning the final path.
///
/// When `dst` is an existing directory, `src` moves inside it. Moves across
/// filesystems fall back to copy then delete.
pub fn move_path(src: &Path, dst: &Path) -> Result<PathBuf> {
    validate(src)?;

    let target = into_dir(src, dst);
    match fs::rename(src, &target) {
        Ok(()) => Ok(target),
        Err(e) if e.kind() == ErrorKind::CrossesDevices => {
            tracing::debug!(
                "{} and {} are on different filesystems, copying",
                src.display(),
                target.display()
            );
            copy_then_delete(src, &target)
                .map_err(|e| FsnavError::transfer("move", src, &target, e))?;
            Ok(target)
        }
        Err(e) => Err(FsnavError::transfer("move", src, &target, e)),
    }
}

/// Read a whole file as text.
pub fn read(path: &Path) -> Result<String> {
    validate(path)?;
    if path.is_dir() {
        return Err(FsnavError::IsADirectory {
            path: path.to_path_buf(),
        });
    }

    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FsnavError::PathNotFound {
            path: path.to_path_buf(),
        },
        _ => FsnavError::io("read file", path, e),
    })
}

fn into_dir(src: &Path, dst: &Path) -> PathBuf {
    match src.file_name() {
        Some(name) if dst.is_dir() => dst.join(name),
        _ => dst.to_path_buf(),
    }
}

/// Whether both paths name the same existing file.
#[cfg(unix)]
fn same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn copy_then_delete(src: &Path, dst: &Path) -> std::io::Result<()> {
    if src.is_dir() {
        tree::copy_tree(src, dst)?;
        fs::remove_dir_all(src)
    } else {
        tree::copy_file(src, dst)?;
        fs::remove_file(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn remove_file_deletes() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("gone.txt");
        fs::write(&file, "").unwrap();

        remove_file(&file).unwrap();
        assert!(!file.exists());
    }

    #[test]
    fn remove_file_refuses_directory() {
        let temp = TempDir::new().unwrap();
        let err = remove_file(temp.path()).unwrap_err();
        assert!(matches!(err, FsnavError::IsADirectory { .. }));
        assert!(temp.path().exists());
    }

    #[test]
    fn remove_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = remove_file(&temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, FsnavError::PathNotFound { .. }));
    }

    #[test]
    fn copy_file_overwrites_destination() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a.txt");
        let dst = temp.path().join("b.txt");
        fs::write(&src, "new").unwrap();
        fs::write(&dst, "old").unwrap();

        let outcome = copy(&src, &dst).unwrap();

        assert_eq!(outcome.kind, CopyKind::File);
        assert_eq!(fs::read_to_string(&dst).unwrap(), "new");
        assert!(src.exists());
    }

    #[test]
    fn copy_file_into_existing_directory() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a.txt");
        let dir = temp.path().join("dir");
        fs::write(&src, "x").unwrap();
        fs::create_dir(&dir).unwrap();

        let outcome = copy(&src, &dir).unwrap();
        assert_eq!(outcome.destination, dir.join("a.txt"));
        assert!(dir.join("a.txt").exists());
    }

    #[test]
    fn copy_file_onto_itself_keeps_contents() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.txt");
        fs::write(&file, "precious").unwrap();

        let err = copy(&file, &file).unwrap_err();
        assert!(matches!(err, FsnavError::Transfer { .. }));
        assert!(err.to_string().contains("same file"));
        assert_eq!(fs::read_to_string(&file).unwrap(), "precious");
    }

    #[test]
    fn copy_file_into_its_own_directory_keeps_contents() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.txt");
        fs::write(&file, "precious").unwrap();

        let err = copy(&file, temp.path()).unwrap_err();
        assert!(matches!(err, FsnavError::Transfer { .. }));
        assert_eq!(fs::read_to_string(&file).unwrap(), "precious");
    }

    #[cfg(unix)]
    #[test]
    fn copy_file_onto_hard_link_keeps_contents() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.txt");
        let link = temp.path().join("b.txt");
        fs::write(&file, "precious").unwrap();
        fs::hard_link(&file, &link).unwrap();

        assert!(copy(&file, &link).is_err());
        assert_eq!(fs::read_to_string(&link).unwrap(), "precious");
    }

    #[test]
    fn copy_directory_refuses_existing_destination() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        fs::create_dir(&src).unwrap();
        fs::create_dir(&dst).unwrap();

        let err = copy(&src, &dst).unwrap_err();
        assert!(matches!(err, FsnavError::DestinationExists { .. }));
    }

    #[test]
    fn copy_directory_into_itself_fails() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        fs::create_dir(&src).unwrap();

        let err = copy(&src, &src.join("inner")).unwrap_err();
        assert!(matches!(err, FsnavError::Transfer { .. }));
        assert!(!src.join("inner").exists());
    }

    #[test]
    fn copy_missing_source_mutates_nothing() {
        let temp = TempDir::new().unwrap();
        let dst = temp.path().join("dst");

        let err = copy(&temp.path().join("nope"), &dst).unwrap_err();
        assert!(matches!(err, FsnavError::PathNotFound { .. }));
        assert!(!dst.exists());
    }

    #[test]
    fn move_renames_file() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a.txt");
        let dst = temp.path().join("b.txt");
        fs::write(&src, "x").unwrap();

        assert_eq!(move_path(&src, &dst).unwrap(), dst);
        assert!(!src.exists());
        assert_eq!(fs::read_to_string(&dst).unwrap(), "x");
    }

    #[test]
    fn move_into_existing_directory() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("sub");
        let dir = temp.path().join("dir");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("f"), "").unwrap();
        fs::create_dir(&dir).unwrap();

        let target = move_path(&src, &dir).unwrap();
        assert_eq!(target, dir.join("sub"));
        assert!(dir.join("sub/f").exists());
    }

    #[test]
    fn copy_then_delete_moves_tree() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        fs::create_dir_all(src.join("a")).unwrap();
        fs::write(src.join("a/f.txt"), "f").unwrap();

        copy_then_delete(&src, &dst).unwrap();
        assert!(!src.exists());
        assert_eq!(fs::read_to_string(dst.join("a/f.txt")).unwrap(), "f");
    }

    #[test]
    fn read_returns_contents() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.txt");
        fs::write(&file, "line one\nline two\n").unwrap();
        assert_eq!(read(&file).unwrap(), "line one\nline two\n");
    }

    #[test]
    fn read_missing_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = read(&temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, FsnavError::PathNotFound { .. }));
    }

    #[test]
    fn read_binary_is_io_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("bin");
        fs::write(&file, [0xff, 0xfe, 0x00]).unwrap();

        let err = read(&file).unwrap_err();
        assert!(matches!(err, FsnavError::Io { .. }));
    }
}
