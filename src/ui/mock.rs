//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output
//! for later assertion.

use super::UserInterface;

/// Captures every line written through [`UserInterface`].
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    headers: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create an empty MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Clear all captured output.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.headers.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_channel() {
        let mut ui = MockUI::new();
        ui.message("a");
        ui.header("h");
        ui.success("s");
        ui.warning("w");
        ui.error("e");

        assert_eq!(ui.messages(), ["a"]);
        assert_eq!(ui.headers(), ["h"]);
        assert_eq!(ui.successes(), ["s"]);
        assert_eq!(ui.warnings(), ["w"]);
        assert_eq!(ui.errors(), ["e"]);
    }

    #[test]
    fn clear_resets() {
        let mut ui = MockUI::new();
        ui.message("a");
        ui.error("e");
        ui.clear();
        assert!(ui.messages().is_empty());
        assert!(ui.errors().is_empty());
    }
}
