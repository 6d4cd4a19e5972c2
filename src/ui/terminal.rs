//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{FsnavTheme, UserInterface};

/// Writes all output to stdout.
pub struct TerminalUI {
    term: Term,
    theme: FsnavTheme,
}

impl TerminalUI {
    /// Create a terminal UI, colored or plain.
    pub fn new(colors: bool) -> Self {
        let theme = if colors {
            FsnavTheme::new()
        } else {
            FsnavTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn header(&mut self, title: &str) {
        writeln!(self.term, "{}", self.theme.format_header(title)).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }
}
