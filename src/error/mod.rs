//! Error handling and diagnostics for the Lox language
//!
//! Lexical faults are recoverable: the scanner hands them to an [`ErrorSink`]
//! and keeps going. [`LoxError`] covers what the driver collects from the sink
//! plus the faults of the surrounding command-line surface.

use std::fmt;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for Lox operations
pub type LoxResult<T> = Result<T, LoxError>;

/// Receives recoverable lexical errors as they are found.
///
/// Called synchronously, in source order, from inside the scan. Any
/// `FnMut(usize, &str)` closure is a sink.
pub trait ErrorSink {
    fn error(&mut self, line: usize, message: &str);
}

impl<F> ErrorSink for F
where
    F: FnMut(usize, &str),
{
    fn error(&mut self, line: usize, message: &str) {
        self(line, message)
    }
}

/// The kinds of lexical error the scanner can report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A `"` was opened but the input ended first
    UnterminatedString,
    /// A character that starts no token
    UnexpectedCharacter(char),
    /// A number lexeme that does not parse as a double
    InvalidNumber(String),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString => write!(f, "Unterminated string."),
            Self::UnexpectedCharacter(c) => write!(f, "Unexpected character '{}'.", c.escape_debug()),
            Self::InvalidNumber(lexeme) => write!(f, "Invalid number '{}'.", lexeme),
        }
    }
}

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-based)
    pub line: usize,
    /// Optional filename
    pub filename: Option<String>,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, filename: Option<String>) -> Self {
        Self { line, filename }
    }

    /// Create a source location without a filename
    pub fn at(line: usize) -> Self {
        Self::new(line, None)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref filename) = self.filename {
            write!(f, "{}:{}", filename, self.line)
        } else {
            write!(f, "line {}", self.line)
        }
    }
}

/// Main error type for the Lox front end
#[derive(Debug, Clone, PartialEq)]
pub enum LoxError {
    /// Lexical error collected from the scanner
    LexerError {
        message: String,
        location: SourceLocation,
    },
    /// A script could not be read
    IoError { message: String },
    /// The command line was malformed
    UsageError { message: String },
}

impl LoxError {
    /// Create a new lexer error
    pub fn lexer_error(message: impl Into<String>, location: SourceLocation) -> Self {
        Self::LexerError {
            message: message.into(),
            location,
        }
    }

    /// Create a new I/O error
    pub fn io_error(message: impl Into<String>) -> Self {
        Self::IoError {
            message: message.into(),
        }
    }

    /// Create a new usage error
    pub fn usage_error(message: impl Into<String>) -> Self {
        Self::UsageError {
            message: message.into(),
        }
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        match self {
            Self::LexerError { .. } => "Lexer Error",
            Self::IoError { .. } => "I/O Error",
            Self::UsageError { .. } => "Usage Error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        match self {
            Self::LexerError { message, .. }
            | Self::IoError { message }
            | Self::UsageError { message } => message,
        }
    }

    /// Get the source location if available
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::LexerError { location, .. } => Some(location),
            Self::IoError { .. } | Self::UsageError { .. } => None,
        }
    }

    /// Process exit status conventionally used for this error (sysexits.h)
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UsageError { .. } => 64,
            Self::LexerError { .. } => 65,
            Self::IoError { .. } => 74,
        }
    }
}

impl fmt::Display for LoxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = self.location() {
            write!(f, "{}: {} at {}", self.kind(), self.message(), location)
        } else {
            write!(f, "{}: {}", self.kind(), self.message())
        }
    }
}

impl std::error::Error for LoxError {}
