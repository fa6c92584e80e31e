//! Parser errors (§7).
//!
//! The source raises a bare `SyntaxError(message)` and lets it propagate to
//! the top; here it's a proper error type carrying a span, so the driver can
//! point at the offending token instead of just printing a string.

use lc_util::Span;

#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        ParseError { message: message.into(), span }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
