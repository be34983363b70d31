//! Diagnostic formatting for better error messages
//!
//! This module formats error messages with the offending source line as context.

use super::{LoxError, SourceLocation};
use colored::Colorize;

/// Diagnostic information for displaying errors with context
pub struct Diagnostic<'a> {
    error: &'a LoxError,
    source: Option<&'a str>,
}

impl<'a> Diagnostic<'a> {
    /// Create a new diagnostic from an error
    pub fn new(error: &'a LoxError) -> Self {
        Self {
            error,
            source: None,
        }
    }

    /// Create a diagnostic with source code context
    pub fn with_source(error: &'a LoxError, source: &'a str) -> Self {
        Self {
            error,
            source: Some(source),
        }
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        let kind = self.error.kind().red().bold();
        output.push_str(&format!("{}: ", kind));
        output.push_str(self.error.message());
        output.push('\n');

        if let Some(location) = self.error.location() {
            output.push_str(&format!("  {} {}\n", "-->".blue().bold(), location));

            if let Some(source) = self.source {
                output.push_str(&self.format_source_context(source, location));
            }
        }

        output
    }

    /// Show the line the error was reported on, with a gutter
    fn format_source_context(&self, source: &str, location: &SourceLocation) -> String {
        let lines: Vec<&str> = source.lines().collect();

        if location.line == 0 || location.line > lines.len() {
            return String::new();
        }

        let line_num_width = location.line.to_string().len();
        let gutter = " ".repeat(line_num_width);
        let text = lines[location.line - 1];

        let mut output = String::new();
        output.push_str(&format!("  {} {}\n", gutter, "|".blue().bold()));
        output.push_str(&format!(
            "  {} {} {}\n",
            location.line.to_string().blue().bold(),
            "|".blue().bold(),
            text
        ));
        output.push_str(&format!(
            "  {} {} {}\n",
            gutter,
            "|".blue().bold(),
            "^".repeat(text.chars().count().max(1)).red().bold()
        ));

        output
    }
}

impl std::fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_without_source() {
        let err = LoxError::lexer_error("Unterminated string.", SourceLocation::at(1));
        let formatted = Diagnostic::new(&err).format();

        assert!(formatted.contains("Lexer Error"));
        assert!(formatted.contains("Unterminated string."));
        assert!(formatted.contains("line 1"));
    }

    #[test]
    fn test_diagnostic_with_source() {
        let source = "var x = 42;\nvar y = @;\nvar z = 10;";
        let err = LoxError::lexer_error("Unexpected character '@'.", SourceLocation::at(2));
        let formatted = Diagnostic::with_source(&err, source).format();

        assert!(formatted.contains("Lexer Error"));
        assert!(formatted.contains("var y = @;"));
        assert!(!formatted.contains("var x = 42;"));
    }

    #[test]
    fn test_diagnostic_line_out_of_range() {
        let err = LoxError::lexer_error("Unterminated string.", SourceLocation::at(9));
        let formatted = Diagnostic::with_source(&err, "\"abc").format();

        assert!(formatted.contains("Unterminated string."));
        assert!(!formatted.contains("\"abc"));
    }

    #[test]
    fn test_diagnostic_without_location() {
        let err = LoxError::io_error("Failed to read file 'missing.lox'");
        let formatted = Diagnostic::with_source(&err, "print 1;").format();

        assert!(formatted.contains("I/O Error"));
        assert!(!formatted.contains("-->"));
    }
}
