//! String and regex literal scanning.
//!
//! STRING is tried before REGEX in the rule table so `"a/b"` lexes as a
//! string rather than string-plus-regex; REGEX is tried before plain DIV so
//! `/a/` lexes as a regex even though `/` alone is division (§4.3). Because
//! this is a purely lexical, context-free decision, regex always wins over
//! division whenever both could match.

use lc_util::Position;

use super::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Scans a `"..."` or `'...'` literal starting at the opening quote.
    /// Backslash-escapes the next char unconditionally (matching the
    /// source's `\\.` escape rule) and does not stop at embedded newlines —
    /// only the matching quote or EOF ends the scan.
    pub(crate) fn lex_string(&mut self, start: Position, quote: char) -> Token {
        let mut text = String::new();
        text.push(quote);
        self.cursor.advance();

        loop {
            match self.cursor.current() {
                None => {
                    let span = self.span_from(start);
                    self.report(
                        lc_util::DiagnosticCode::UnterminatedString,
                        format!("unterminated string literal: {}", text),
                        span,
                    );
                    return Token::new(TokenKind::UnterminatedString, text, span);
                }
                Some('\\') => {
                    text.push('\\');
                    self.cursor.advance();
                    if let Some(escaped) = self.cursor.current() {
                        text.push(escaped);
                        self.cursor.advance();
                    }
                }
                Some(c) if c == quote => {
                    text.push(c);
                    self.cursor.advance();
                    let span = self.span_from(start);
                    return Token::new(TokenKind::String, text, span);
                }
                Some(c) => {
                    text.push(c);
                    self.cursor.advance();
                }
            }
        }
    }

    /// Called when the cursor sits on a `/` that isn't the start of a
    /// comment. Tries a regex literal first; falls back to `DIV`.
    pub(crate) fn lex_slash_or_regex(&mut self, start: Position) -> Token {
        if let Some(len) = self.try_match_regex() {
            let text = self.cursor.rest()[..len].to_string();
            let target = self.cursor.offset() + len;
            self.cursor.advance_to(target);
            let span = self.span_from(start);
            Token::new(TokenKind::Regex, text, span)
        } else {
            self.cursor.advance();
            let span = self.span_from(start);
            Token::new(TokenKind::Div, "/", span)
        }
    }

    /// Byte length of a `/…/` regex match starting at the cursor, if one
    /// exists, without consuming anything. Requires at least one char of
    /// content and forbids unescaped `/` or any `\n` inside the body.
    fn try_match_regex(&self) -> Option<usize> {
        let rest = self.cursor.rest();
        let mut chars = rest.char_indices();
        let (_, slash) = chars.next()?;
        if slash != '/' {
            return None;
        }

        let mut pos = slash.len_utf8();
        let mut saw_content = false;
        loop {
            let c = rest[pos..].chars().next()?;
            match c {
                '/' if saw_content => return Some(pos + 1),
                '/' => return None,
                '\n' => return None,
                '\\' => {
                    pos += c.len_utf8();
                    let escaped = rest[pos..].chars().next()?;
                    pos += escaped.len_utf8();
                    saw_content = true;
                }
                _ => {
                    pos += c.len_utf8();
                    saw_content = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::core::Lexer;
    use crate::token::TokenKind;
    use lc_util::Handler;

    fn tokenize(src: &str) -> Vec<Token> {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(src, &mut handler);
        lexer.tokenize()
    }
    use crate::token::Token;

    #[test]
    fn string_literal_keeps_quotes_verbatim() {
        let tokens = tokenize(r#""hello world""#);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, "\"hello world\"");
    }

    #[test]
    fn unterminated_string_is_reported() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("\"never closed", &mut handler);
        let tokens = lexer.tokenize();
        assert_eq!(tokens[0].kind, TokenKind::UnterminatedString);
        assert!(handler.has_errors());
    }

    #[test]
    fn slash_pattern_wins_over_division() {
        let tokens = tokenize("/abc/");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Regex);
    }

    #[test]
    fn bare_slash_is_division() {
        let tokens = tokenize("a / b");
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Div));
    }

    #[test]
    fn quoted_slash_is_a_string_not_regex() {
        let tokens = tokenize(r#""a/b""#);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::String);
    }
}
