//! Top-level driver
//!
//! `Lox` owns the error state across runs. Each run scans one source string
//! with a sink that records every reported error.

use log::{debug, warn};

use crate::error::{LoxError, SourceLocation};
use crate::lexer::{Scanner, Token};

/// Driver that scans source text and accumulates lexical errors
#[derive(Debug, Default)]
pub struct Lox {
    filename: Option<String>,
    errors: Vec<LoxError>,
}

impl Lox {
    /// Create a driver for anonymous input (the prompt, tests)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a driver whose errors name `filename`
    pub fn with_filename(filename: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            errors: Vec::new(),
        }
    }

    /// Scan `source` and return its tokens.
    ///
    /// Errors found along the way are appended to [`Lox::errors`]; the token
    /// sequence is returned either way.
    pub fn run(&mut self, source: &str) -> Vec<Token> {
        let filename = &self.filename;
        let errors = &mut self.errors;
        let tokens = Scanner::new(source, |line: usize, message: &str| {
            warn!("line {}: {}", line, message);
            errors.push(LoxError::lexer_error(
                message,
                SourceLocation::new(line, filename.clone()),
            ));
        })
        .scan_tokens();

        debug!(
            "run produced {} tokens, {} errors so far",
            tokens.len(),
            self.errors.len()
        );
        tokens
    }

    /// Whether any error has been recorded since the last `clear_error`
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors recorded since the last `clear_error`, in report order
    pub fn errors(&self) -> &[LoxError] {
        &self.errors
    }

    /// Forget recorded errors
    pub fn clear_error(&mut self) {
        self.errors.clear();
    }
}
