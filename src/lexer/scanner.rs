//! Scanner implementation for the Lox language
//!
//! This module implements lexical analysis, converting source code into tokens.
//! Malformed input never stops the scan: each fault is handed to the caller's
//! [`ErrorSink`] and scanning resumes after the offending text.

use log::{debug, trace};

use crate::error::{ErrorSink, LexErrorKind};
use super::token::{Literal, Token, TokenType};

/// Scanner for Lox source code
///
/// Built fresh for each source string and consumed by [`Scanner::scan_tokens`].
pub struct Scanner<S: ErrorSink> {
    source: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    /// Line of the character at `start`
    start_line: usize,
    sink: S,
}

impl<S: ErrorSink> Scanner<S> {
    /// Create a new scanner over `source`, reporting errors to `sink`
    pub fn new(source: &str, sink: S) -> Self {
        Self {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
            sink,
        }
    }

    /// Scan the whole source. The result always ends with a single EOF token.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.line));
        debug!(
            "scanned {} chars into {} tokens over {} lines",
            self.source.len(),
            self.tokens.len(),
            self.line
        );

        self.tokens
    }

    /// Scan a single token
    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            // Single-character tokens
            '(' => self.add_token(TokenType::LeftParen),
            ')' => self.add_token(TokenType::RightParen),
            '{' => self.add_token(TokenType::LeftBrace),
            '}' => self.add_token(TokenType::RightBrace),
            ',' => self.add_token(TokenType::Comma),
            '.' => self.add_token(TokenType::Dot),
            '-' => self.add_token(TokenType::Minus),
            '+' => self.add_token(TokenType::Plus),
            ';' => self.add_token(TokenType::Semicolon),
            '*' => self.add_token(TokenType::Star),

            // One or two character tokens
            '!' => {
                let token_type = if self.match_char('=') {
                    TokenType::BangEqual
                } else {
                    TokenType::Bang
                };
                self.add_token(token_type)
            }
            '=' => {
                let token_type = if self.match_char('=') {
                    TokenType::EqualEqual
                } else {
                    TokenType::Equal
                };
                self.add_token(token_type)
            }
            '<' => {
                let token_type = if self.match_char('=') {
                    TokenType::LessEqual
                } else {
                    TokenType::Less
                };
                self.add_token(token_type)
            }
            '>' => {
                let token_type = if self.match_char('=') {
                    TokenType::GreaterEqual
                } else {
                    TokenType::Greater
                };
                self.add_token(token_type)
            }

            '/' => {
                if self.match_char('/') {
                    // Comment runs to the end of the line; the newline is left for scan_token
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenType::Slash)
                }
            }

            // Whitespace (skip)
            ' ' | '\r' | '\t' => {}

            '\n' => self.line += 1,

            '"' => self.scan_string(),

            c if is_digit(c) => self.scan_number(),

            c if is_alpha(c) => self.scan_identifier(),

            _ => self.error(self.line, LexErrorKind::UnexpectedCharacter(c)),
        }
    }

    /// Scan a string literal; the opening quote is already consumed
    fn scan_string(&mut self) {
        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.error(self.start_line, LexErrorKind::UnterminatedString);
            return;
        }

        // The closing quote
        self.advance();

        let value: String = self.source[self.start + 1..self.current - 1].iter().collect();
        self.add_token_with_literal(TokenType::String, Literal::Text(value));
    }

    /// Scan a number literal: digits with an optional fractional part
    fn scan_number(&mut self) {
        while is_digit(self.peek()) {
            self.advance();
        }

        // A '.' is only part of the number when a digit follows it
        if self.peek() == '.' && is_digit(self.peek_next()) {
            self.advance();
            while is_digit(self.peek()) {
                self.advance();
            }
        }

        let lexeme = self.lexeme();
        match lexeme.parse::<f64>() {
            Ok(value) => self.add_token_with_literal(TokenType::Number, Literal::Number(value)),
            Err(_) => self.error(self.start_line, LexErrorKind::InvalidNumber(lexeme)),
        }
    }

    /// Scan an identifier or keyword
    fn scan_identifier(&mut self) {
        while is_alpha_numeric(self.peek()) {
            self.advance();
        }

        let token_type = TokenType::keyword(&self.lexeme()).unwrap_or(TokenType::Identifier);
        self.add_token(token_type)
    }

    fn add_token(&mut self, token_type: TokenType) {
        self.add_token_with_literal(token_type, Literal::None)
    }

    fn add_token_with_literal(&mut self, token_type: TokenType, literal: Literal) {
        let token = Token::new(token_type, self.lexeme(), literal, self.start_line);
        trace!("line {}: {:?} {:?}", token.line, token.token_type, token.lexeme);
        self.tokens.push(token);
    }

    fn error(&mut self, line: usize, kind: LexErrorKind) {
        self.sink.error(line, &kind.to_string());
    }

    /// Source text between `start` and `current`
    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    /// Consume and return the next character. Callers check `is_at_end` first.
    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    /// Consume the next character only if it is `expected`
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() != expected || self.is_at_end() {
            return false;
        }
        self.advance();
        true
    }

    /// Look `offset` characters past `current` without consuming; NUL past the end
    fn peek_at(&self, offset: usize) -> char {
        self.source
            .get(self.current + offset)
            .copied()
            .unwrap_or('\0')
    }

    fn peek(&self) -> char {
        self.peek_at(0)
    }

    fn peek_next(&self) -> char {
        self.peek_at(1)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}
