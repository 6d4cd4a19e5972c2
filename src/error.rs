//! Error types for fsnav operations.
//!
//! This module defines [`FsnavError`], the error type returned by every
//! filesystem operation and command, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - Path validation failures are [`FsnavError::PathNotFound`] and
//!   [`FsnavError::PathNotAccessible`]
//! - OS failures carry the action and path that failed ([`FsnavError::Io`])
//! - Argument problems are caught while building the invocation
//! - Use `anyhow::Error` (via `FsnavError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for fsnav operations.
#[derive(Debug, Error)]
pub enum FsnavError {
    /// The path does not exist.
    #[error("The path '{}' does not exist.", path.display())]
    PathNotFound { path: PathBuf },

    /// The path exists but cannot be read by this process.
    #[error("The path '{}' is not accessible.", path.display())]
    PathNotAccessible { path: PathBuf },

    /// A directory was required.
    #[error("The path '{}' is not a directory.", path.display())]
    NotADirectory { path: PathBuf },

    /// A file was required but a directory was given.
    #[error("The path '{}' is a directory.", path.display())]
    IsADirectory { path: PathBuf },

    /// Copy target already exists.
    #[error("The destination '{}' already exists.", path.display())]
    DestinationExists { path: PathBuf },

    /// A command was invoked without an argument it needs.
    #[error("Command '{command}' requires {argument}")]
    MissingArgument {
        command: String,
        argument: &'static str,
    },

    /// The command name is not one fsnav knows.
    #[error("Invalid command: {name}")]
    UnknownCommand { name: String },

    /// An OS-level failure while acting on a path.
    #[error("Could not {action} '{}'. {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An OS-level failure while copying or moving between two paths.
    #[error("Could not {action} '{}' to '{}'. {source}", from.display(), to.display())]
    Transfer {
        action: &'static str,
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Working directory record could not be serialized.
    #[error("Failed to serialize working directory record: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Broad classification of an [`FsnavError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Validation of a user-supplied path failed.
    Path,
    /// The operating system refused the operation.
    Os,
    /// The invocation itself was malformed.
    Usage,
    /// Anything else.
    Unexpected,
}

impl FsnavError {
    /// Wrap an IO error with the action and path it happened on.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Wrap an IO error from a two-path operation.
    pub fn transfer(
        action: &'static str,
        from: impl Into<PathBuf>,
        to: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Transfer {
            action,
            from: from.into(),
            to: to.into(),
            source,
        }
    }

    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PathNotFound { .. } | Self::PathNotAccessible { .. } => ErrorKind::Path,
            Self::NotADirectory { .. }
            | Self::IsADirectory { .. }
            | Self::DestinationExists { .. }
            | Self::Io { .. }
            | Self::Transfer { .. } => ErrorKind::Os,
            Self::MissingArgument { .. } | Self::UnknownCommand { .. } => ErrorKind::Usage,
            Self::Json(_) | Self::Other(_) => ErrorKind::Unexpected,
        }
    }
}

/// Result type alias for fsnav operations.
pub type Result<T> = std::result::Result<T, FsnavError>;
