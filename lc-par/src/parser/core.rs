//! Parser core: token cursor, `peek`/`match`/`consume` primitives (§4.5).
//!
//! Reading off the end of the token list always yields the trailing `EOF`
//! token rather than panicking, mirroring the source's `peek` falling back
//! to `tokens[-1]`.

use crate::error::{ParseError, ParseResult};
use crate::token_norm::{ParserToken, ParserTokenKind};

pub struct Parser<'t> {
    pub(crate) tokens: &'t [ParserToken],
    pub(crate) pos: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [ParserToken]) -> Self {
        Parser { tokens, pos: 0 }
    }

    pub(crate) fn peek(&self) -> &ParserToken {
        self.tokens.get(self.pos).unwrap_or_else(|| self.tokens.last().expect("token stream always has EOF"))
    }

    pub(crate) fn peek_at(&self, offset: usize) -> &ParserToken {
        self.tokens.get(self.pos + offset).unwrap_or_else(|| self.tokens.last().expect("token stream always has EOF"))
    }

    pub(crate) fn previous(&self) -> &ParserToken {
        &self.tokens[self.pos - 1]
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().kind == ParserTokenKind::Eof
    }

    pub(crate) fn check(&self, kind: ParserTokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Advances and returns `true` if the current token is `kind`.
    pub(crate) fn match_one(&mut self, kind: ParserTokenKind) -> bool {
        if self.check(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Advances and returns `true` if the current token is any of `kinds`.
    pub(crate) fn match_any(&mut self, kinds: &[ParserTokenKind]) -> bool {
        if kinds.contains(&self.peek().kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn consume(&mut self, kind: ParserTokenKind, message: &str) -> ParseResult<&ParserToken> {
        if self.peek().kind != kind {
            return Err(ParseError::new(format!("{}. Got: {:?}", message, self.peek().kind), self.peek().span));
        }
        self.pos += 1;
        Ok(self.previous())
    }

    pub(crate) fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(message.into(), self.peek().span)
    }
}
