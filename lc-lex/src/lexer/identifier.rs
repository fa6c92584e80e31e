//! Identifier scanning: `[A-Za-z_]\w*`. Keyword/identifier disambiguation
//! happens later, in the token normalizer (§4.4) — the lexer itself only
//! ever produces `Ident`.

use lc_util::Position;

use super::core::{is_ident_continue, Lexer};
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_identifier(&mut self, start: Position) -> Token {
        let mut text = String::new();
        while let Some(c) = self.cursor.current() {
            if is_ident_continue(c) {
                text.push(c);
                self.cursor.advance();
            } else {
                break;
            }
        }
        let span = self.span_from(start);
        Token::new(TokenKind::Ident, text, span)
    }
}

#[cfg(test)]
mod tests {
    use super::super::core::Lexer;
    use crate::token::TokenKind;
    use lc_util::Handler;

    #[test]
    fn identifier_allows_underscores_and_digits_after_first_char() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("_foo_bar123", &mut handler);
        let tokens = lexer.tokenize();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[0].text, "_foo_bar123");
    }
}
