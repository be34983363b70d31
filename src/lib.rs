//! # loxbagel
//!
//! The front end of a small dynamically-typed scripting language (Lox).
//!
//! ## Architecture
//!
//! - `lexer`: Tokenization of source code
//! - `error`: Error sink, error types and diagnostics
//! - `lox`: Driver that owns error state across runs

pub mod error;
pub mod lexer;
pub mod lox;

// Re-export commonly used types
pub use error::{Diagnostic, ErrorSink, LoxError, LoxResult, SourceLocation};
pub use lexer::{Literal, Scanner, Token, TokenType};
pub use lox::Lox;

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan `source` into tokens, reporting lexical errors to `sink`.
///
/// The returned sequence always ends with exactly one EOF token.
pub fn scan<S: ErrorSink>(source: &str, sink: S) -> Vec<Token> {
    Scanner::new(source, sink).scan_tokens()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_scan_entry_point() {
        let mut reported = 0;
        let tokens = scan("var x = @;", |_: usize, _: &str| reported += 1);
        assert_eq!(reported, 1);
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[4].token_type, TokenType::Eof);
    }
}
