use colored::*;

pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn node(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn header(&self, text: &str) -> ColoredString {
        text.bold()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn algorithm(&self, text: &str) -> ColoredString {
        text.blue()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }

    /// Cells with nothing to report, such as a missing path or cost
    pub fn unavailable(&self, text: &str) -> ColoredString {
        text.yellow().dimmed()
    }
}
