//! Path resolution against the simulated working directory.

use std::path::{Component, Path, PathBuf};

/// Join `path` onto `base` unless it is already absolute, then normalize.
///
/// # Example
///
/// ```
/// use std::path::{Path, PathBuf};
/// use fsnav::environment::resolve;
///
/// assert_eq!(resolve(Path::new("/srv"), "a/../b"), PathBuf::from("/srv/b"));
/// assert_eq!(resolve(Path::new("/srv"), "/etc"), PathBuf::from("/etc"));
/// ```
pub fn resolve(base: &Path, path: &str) -> PathBuf {
    normalize(&base.join(path))
}

/// Lexically remove `.` components and fold `..` into its parent.
///
/// The filesystem is not consulted, so symlinks are not resolved. A `..`
/// that would climb above the root is dropped; a leading `..` on a relative
/// path is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_resolves_to_base() {
        assert_eq!(resolve(Path::new("/home/u"), "."), PathBuf::from("/home/u"));
    }

    #[test]
    fn parent_dir_folds() {
        assert_eq!(
            resolve(Path::new("/home/u/docs"), "../pics/./a.png"),
            PathBuf::from("/home/u/pics/a.png")
        );
    }

    #[test]
    fn absolute_path_ignores_base() {
        assert_eq!(resolve(Path::new("/home/u"), "/tmp/x"), PathBuf::from("/tmp/x"));
    }

    #[test]
    fn parent_of_root_stays_root() {
        assert_eq!(normalize(Path::new("/../..")), PathBuf::from("/"));
    }

    #[test]
    fn relative_leading_parent_is_kept() {
        assert_eq!(normalize(Path::new("../a/./b")), PathBuf::from("../a/b"));
    }

    #[test]
    fn empty_result_is_current_dir() {
        assert_eq!(normalize(Path::new("a/..")), PathBuf::from("."));
    }
}
