//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for writing to stdout
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use fsnav::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("notes.txt");
//! ui.error("Error: The path 'x' does not exist.");
//!
//! assert!(ui.has_message("notes.txt"));
//! assert!(ui.has_error("does not exist"));
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, FsnavTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Display a plain line, such as a directory entry.
    fn message(&mut self, msg: &str);

    /// Display a heading above a list of results.
    fn header(&mut self, title: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
