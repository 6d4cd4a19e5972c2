//! Filesystem operations.
//!
//! Every function here takes already-resolved paths, validates them with
//! [`validate`], and returns a typed [`Result`](crate::error::Result). Nothing
//! in this module prints; commands decide how outcomes are shown.

pub mod dir;
pub mod file;
pub mod find;
pub mod tree;
pub mod validate;

pub use dir::{list, make_dir, remove_empty_dir, remove_tree};
pub use file::{copy, move_path, read, remove_file, CopyKind, CopyOutcome};
pub use find::{find, SearchResults};
pub use validate::{validate, validate_creatable};
