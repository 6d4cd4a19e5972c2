//! Recursive directory helpers.

use std::fs::{self, File, FileTimes};
use std::io;
use std::path::Path;

/// Copy a single file, keeping permissions and access/modification times.
///
/// Overwrites `dst` if it exists.
pub fn copy_file(src: &Path, dst: &Path) -> io::Result<()> {
    fs::copy(src, dst)?;

    let metadata = fs::metadata(src)?;
    let mut times = FileTimes::new().set_modified(metadata.modified()?);
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    // futimens on a read-only handle is enough for the owner
    File::open(dst)?.set_times(times)?;
    Ok(())
}

/// Copy the directory tree at `src` to `dst`. `dst` must not exist.
///
/// Symlinks are followed, so their targets are copied as regular content.
pub fn copy_tree(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir(dst)?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();
        let target = dst.join(entry.file_name());

        if path.is_dir() {
            copy_tree(&path, &target)?;
        } else {
            copy_file(&path, &target)?;
        }
    }

    // Applied last so a read-only source directory still gets its children
    fs::set_permissions(dst, fs::metadata(src)?.permissions())?;
    Ok(())
}

/// Visit every non-directory entry below `root`.
///
/// Symlinked directories are not descended into. Subdirectories that can't
/// be read are passed to `skip` and the walk carries on.
pub fn walk_files(
    root: &Path,
    visit: &mut dyn FnMut(&Path),
    skip: &mut dyn FnMut(&Path, io::Error),
) -> io::Result<()> {
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            if let Err(e) = walk_files(&path, visit, skip) {
                skip(&path, e);
            }
        } else if !(file_type.is_symlink() && path.is_dir()) {
            visit(&path);
        }
    }

    Ok(())
}
