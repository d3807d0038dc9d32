//! Parse diagnostics.
//!
//! Parsing never aborts on the first error (§4.2 Error Policy): each
//! handler that hits a missing/unexpected token appends a `ParseError` to
//! the parser's accumulator and returns `None`, dropping the surrounding
//! statement rather than the whole program.

use crate::token::{Span, TokenKind};

/// A syntax error with the source location it was found at.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        ParseError {
            message: message.into(),
            span,
        }
    }

    /// "Expected 'X'. Got Y" — the generic missing-token message from §4.2.
    pub fn expected(expected: &str, got: &TokenKind, span: Span) -> Self {
        ParseError::new(
            format!("Expected '{expected}'. Got {}", got.name()),
            span,
        )
    }

    /// No prefix parser registered for the current token.
    pub fn no_prefix_parser(got: &TokenKind, span: Span) -> Self {
        ParseError::new(format!("no prefix parser for {}", got.name()), span)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}
