//! Core lexer implementation.
//!
//! The token table in the design is an **ordered** list of (kind, pattern)
//! rules; later rules are fallbacks only (§4.3). Rather than compiling one
//! alternation regex, the ordering is encoded directly in this dispatch: for
//! every starting character we try the longer/more specific rule before the
//! shorter/more general one (`/*` before `//` before a regex literal before
//! plain `/`; `->` before `-`; `=>` before `=`; and so on).

use lc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Level, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) handler: &'a mut Handler,
    pub(crate) file_path: Option<String>,
    /// Set once an unterminated multiline comment is hit; lexing stops
    /// producing further tokens (§4.3: "EOF before close ⇒ ... terminate
    /// lexing").
    pub(crate) halted: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Lexer { cursor: Cursor::new(source), handler, file_path: None, halted: false }
    }

    pub fn with_file(source: &'a str, handler: &'a mut Handler, file_path: impl Into<String>) -> Self {
        let mut lexer = Self::new(source, handler);
        lexer.file_path = Some(file_path.into());
        lexer
    }

    pub(crate) fn span_from(&self, start: lc_util::Position) -> Span {
        Span::new(start.offset, self.cursor.offset(), start.line, start.column)
    }

    pub(crate) fn report(&mut self, code: DiagnosticCode, message: impl Into<String>, span: Span) {
        let mut builder = DiagnosticBuilder::new(Level::Error, code, message).span(span);
        if let Some(path) = &self.file_path {
            builder = builder.file(path.clone());
        }
        builder.emit(self.handler);
    }

    /// Returns the next significant token, skipping whitespace and comments
    /// inline, or `None` at end of input (or once lexing has halted on an
    /// unterminated multiline comment).
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            if self.halted || self.cursor.is_at_end() {
                return None;
            }

            let start = self.cursor.position();
            let ch = self.cursor.current().expect("checked not at end");

            match ch {
                ' ' | '\t' => {
                    self.skip_whitespace();
                    continue;
                }
                '/' if self.cursor.peek_at(1) == Some('*') => {
                    self.skip_multiline_comment(start);
                    continue;
                }
                '/' if self.cursor.peek_at(1) == Some('/') => {
                    self.skip_line_comment();
                    continue;
                }
                '"' | '\'' => return Some(self.lex_string(start, ch)),
                '/' => return Some(self.lex_slash_or_regex(start)),
                c if c.is_ascii_digit() => return Some(self.lex_number(start)),
                c if is_ident_start(c) => return Some(self.lex_identifier(start)),
                '\n' => {
                    self.cursor.advance();
                    return Some(Token::new(TokenKind::Newline, "\n", self.span_from(start)));
                }
                _ => return Some(self.lex_operator(start)),
            }
        }
    }

    /// Collects every token up to (not including) end of input. Mirrors the
    /// original's `tokenize()` entry point used by the driver.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(tok) = self.next_token() {
            tokens.push(tok);
        }
        tokens
    }
}

pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use lc_util::Handler;

    fn tokenize(src: &str) -> Vec<Token> {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(src, &mut handler);
        lexer.tokenize()
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn whitespace_and_comments_are_skipped() {
        let tokens = tokenize("  // hello\n  ");
        // the newline is kept (it's a real token kind), whitespace/comments are not.
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Newline);
    }
}
