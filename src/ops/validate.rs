//! Path validation.
//!
//! Every operation that consumes an existing path checks it here before
//! touching the filesystem.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{FsnavError, Result};

/// Check that `path` exists and is readable.
pub fn validate(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(FsnavError::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return Err(FsnavError::PathNotAccessible {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(FsnavError::io("inspect", path, e)),
    }

    if !is_readable(path) {
        return Err(FsnavError::PathNotAccessible {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// Check that `path` could be created: its nearest existing ancestor must
/// pass [`validate`].
pub fn validate_creatable(path: &Path) -> Result<()> {
    match path.ancestors().find(|p| !p.as_os_str().is_empty() && p.exists()) {
        Some(ancestor) => validate(ancestor),
        None => Ok(()),
    }
}

#[cfg(unix)]
fn is_readable(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: access() only reads the NUL-terminated string we own
    unsafe { libc::access(c_path.as_ptr(), libc::R_OK) == 0 }
}

#[cfg(not(unix))]
fn is_readable(path: &Path) -> bool {
    if path.is_dir() {
        fs::read_dir(path).is_ok()
    } else {
        fs::File::open(path).is_ok()
    }
}
