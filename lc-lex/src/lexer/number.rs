//! Numeric literal scanning: BINARY, HEX, FLOAT, INTEGER, tried in that
//! order (§3) so `0b101` and `0x1A3` aren't swallowed by the plain integer
//! rule, and `3.14` isn't split into `3`, `.`, `14`.

use lc_util::Position;

use super::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_number(&mut self, start: Position) -> Token {
        let rest = self.cursor.rest();

        if let Some(digits) = rest.strip_prefix("0b") {
            let run = digit_run(digits, |c| c == '0' || c == '1');
            if run > 0 {
                return self.consume_number(start, 2 + run, TokenKind::Binary, |text| {
                    i64::from_str_radix(&text[2..], 2).unwrap_or(0)
                });
            }
        }

        if let Some(digits) = rest.strip_prefix("0x") {
            let run = digit_run(digits, |c| c.is_ascii_hexdigit());
            if run > 0 {
                return self.consume_number(start, 2 + run, TokenKind::Hex, |text| {
                    i64::from_str_radix(&text[2..], 16).unwrap_or(0)
                });
            }
        }

        let int_run = digit_run(rest, |c| c.is_ascii_digit());
        let after_int = &rest[int_run..];
        if let Some(frac) = after_int.strip_prefix('.') {
            let frac_run = digit_run(frac, |c| c.is_ascii_digit());
            if frac_run > 0 {
                let total = int_run + 1 + frac_run;
                let text = rest[..total].to_string();
                let value: f64 = text.parse().unwrap_or(0.0);
                self.cursor.advance_to(self.cursor.offset() + total);
                let span = self.span_from(start);
                return Token::new(TokenKind::Float, text, span).with_float(value);
            }
        }

        self.consume_number(start, int_run, TokenKind::Integer, |text| text.parse().unwrap_or(0))
    }

    fn consume_number(
        &mut self,
        start: Position,
        len: usize,
        kind: TokenKind,
        parse: impl Fn(&str) -> i64,
    ) -> Token {
        let text = self.cursor.rest()[..len].to_string();
        let value = parse(&text);
        self.cursor.advance_to(self.cursor.offset() + len);
        let span = self.span_from(start);
        Token::new(kind, text, span).with_int(value)
    }
}

fn digit_run(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|(_, c)| !pred(*c))
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::super::core::Lexer;
    use crate::token::TokenKind;
    use lc_util::Handler;

    fn tokenize(src: &str) -> Vec<crate::token::Token> {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(src, &mut handler);
        lexer.tokenize()
    }

    #[test]
    fn integer_literal() {
        let tokens = tokenize("42");
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!(tokens[0].int_value, Some(42));
    }

    #[test]
    fn float_literal() {
        let tokens = tokenize("3.14");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Float);
        assert_eq!(tokens[0].float_value, Some(3.14));
    }

    #[test]
    fn binary_literal() {
        let tokens = tokenize("0b101");
        assert_eq!(tokens[0].kind, TokenKind::Binary);
        assert_eq!(tokens[0].int_value, Some(5));
    }

    #[test]
    fn hex_literal() {
        let tokens = tokenize("0x1A3");
        assert_eq!(tokens[0].kind, TokenKind::Hex);
        assert_eq!(tokens[0].int_value, Some(0x1A3));
    }

    #[test]
    fn bare_zero_b_falls_back_to_integer_then_identifier() {
        let tokens = tokenize("0b");
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!(tokens[1].kind, TokenKind::Ident);
    }
}
