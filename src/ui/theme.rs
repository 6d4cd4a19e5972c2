//! Visual theme and styling.

use console::Style;

/// fsnav's visual theme.
#[derive(Debug, Clone)]
pub struct FsnavTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for headings (bold).
    pub header: Style,
}

impl Default for FsnavTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl FsnavTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        self.success.apply_to(msg).to_string()
    }

    pub fn format_warning(&self, msg: &str) -> String {
        self.warning.apply_to(msg).to_string()
    }

    pub fn format_error(&self, msg: &str) -> String {
        self.error.apply_to(msg).to_string()
    }

    pub fn format_header(&self, title: &str) -> String {
        self.header.apply_to(title).to_string()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
