//! Operators and punctuation.
//!
//! Two-char operators are checked before their single-char prefix so `**`
//! doesn't lex as `DIV MUL`... — wait, as `MUL` `MUL`, `->` doesn't lex as
//! `MINUS` followed by a stray `>`, and `=>`/`==` win over bare `=` (§4.3,
//! property 5). Anything left over that isn't recognized punctuation is
//! `UNKNOWN`: reported to the handler and still emitted as a token so the
//! normalizer has something uniform to drop (§4.4).

use lc_util::{DiagnosticCode, Position};

use super::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_operator(&mut self, start: Position) -> Token {
        let c = self.cursor.current().expect("caller checked not at end");
        let next = self.cursor.peek_at(1);

        macro_rules! two {
            ($expect:expr, $kind:expr, $text:expr, $fallback_kind:expr, $fallback_text:expr) => {{
                if next == Some($expect) {
                    self.cursor.advance();
                    self.cursor.advance();
                    Token::new($kind, $text, self.span_from(start))
                } else {
                    self.cursor.advance();
                    Token::new($fallback_kind, $fallback_text, self.span_from(start))
                }
            }};
        }

        match c {
            '*' => two!('*', TokenKind::Exponent, "**", TokenKind::Mul, "*"),
            '<' => {
                if next == Some('<') {
                    two!('<', TokenKind::ShiftLeft, "<<", TokenKind::Lt, "<")
                } else {
                    two!('=', TokenKind::Lte, "<=", TokenKind::Lt, "<")
                }
            }
            '>' => {
                if next == Some('>') {
                    two!('>', TokenKind::ShiftRight, ">>", TokenKind::Gt, ">")
                } else {
                    two!('=', TokenKind::Gte, ">=", TokenKind::Gt, ">")
                }
            }
            '=' => {
                if next == Some('=') {
                    two!('=', TokenKind::Equal, "==", TokenKind::Assign, "=")
                } else {
                    two!('>', TokenKind::Arrow, "=>", TokenKind::Assign, "=")
                }
            }
            '!' => two!('=', TokenKind::NotEqual, "!=", TokenKind::Not, "!"),
            '&' => two!('&', TokenKind::And, "&&", TokenKind::BitwiseAnd, "&"),
            '|' => two!('|', TokenKind::Or, "||", TokenKind::BitwiseOr, "|"),
            '-' => two!('>', TokenKind::FunctionArrow, "->", TokenKind::Minus, "-"),
            '+' => self.single(start, TokenKind::Plus, "+"),
            '/' => self.single(start, TokenKind::Div, "/"),
            '%' => self.single(start, TokenKind::Mod, "%"),
            '^' => self.single(start, TokenKind::BitwiseXor, "^"),
            '(' => self.single(start, TokenKind::LParen, "("),
            ')' => self.single(start, TokenKind::RParen, ")"),
            '[' => self.single(start, TokenKind::LBracket, "["),
            ']' => self.single(start, TokenKind::RBracket, "]"),
            '{' => self.single(start, TokenKind::LBrace, "{"),
            '}' => self.single(start, TokenKind::RBrace, "}"),
            '.' => self.single(start, TokenKind::Dot, "."),
            ':' => self.single(start, TokenKind::Colon, ":"),
            ';' => self.single(start, TokenKind::Semicolon, ";"),
            ',' => self.single(start, TokenKind::Comma, ","),
            other => {
                self.cursor.advance();
                let span = self.span_from(start);
                self.report(DiagnosticCode::UnknownToken, format!("unknown character '{}'", other), span);
                Token::new(TokenKind::Unknown, other.to_string(), span)
            }
        }
    }

    fn single(&mut self, start: Position, kind: TokenKind, text: &str) -> Token {
        self.cursor.advance();
        Token::new(kind, text, self.span_from(start))
    }
}

#[cfg(test)]
mod tests {
    use super::super::core::Lexer;
    use crate::token::TokenKind;
    use lc_util::Handler;

    fn kinds(src: &str) -> Vec<TokenKind> {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(src, &mut handler);
        lexer.tokenize().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn longest_match_wins_for_every_multichar_operator() {
        assert_eq!(kinds("**"), vec![TokenKind::Exponent]);
        assert_eq!(kinds("->"), vec![TokenKind::FunctionArrow]);
        assert_eq!(kinds("=>"), vec![TokenKind::Arrow]);
        assert_eq!(kinds("<="), vec![TokenKind::Lte]);
        assert_eq!(kinds(">="), vec![TokenKind::Gte]);
        assert_eq!(kinds("=="), vec![TokenKind::Equal]);
        assert_eq!(kinds("!="), vec![TokenKind::NotEqual]);
        assert_eq!(kinds("&&"), vec![TokenKind::And]);
        assert_eq!(kinds("||"), vec![TokenKind::Or]);
        assert_eq!(kinds("<<"), vec![TokenKind::ShiftLeft]);
        assert_eq!(kinds(">>"), vec![TokenKind::ShiftRight]);
    }

    #[test]
    fn single_char_fallback_when_second_char_absent() {
        assert_eq!(kinds("-"), vec![TokenKind::Minus]);
        assert_eq!(kinds("="), vec![TokenKind::Assign]);
        assert_eq!(kinds("<"), vec![TokenKind::Lt]);
    }

    #[test]
    fn unknown_char_reports_and_still_emits_a_token() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("@", &mut handler);
        let tokens = lexer.tokenize();
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert!(handler.has_errors());
    }
}
