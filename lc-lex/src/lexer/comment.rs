//! Whitespace and comment skipping.

use lc_util::{DiagnosticCode, Position};

use super::core::Lexer;

impl<'a> Lexer<'a> {
    pub(crate) fn skip_whitespace(&mut self) {
        while matches!(self.cursor.current(), Some(' ') | Some('\t')) {
            self.cursor.advance();
        }
    }

    pub(crate) fn skip_line_comment(&mut self) {
        // Already positioned at the first '/' of '//'.
        while let Some(c) = self.cursor.current() {
            if c == '\n' {
                break;
            }
            self.cursor.advance();
        }
    }

    /// Scans past `/*` looking for `*/`. Reports `UnterminatedComment` and
    /// halts lexing if EOF is reached first (§4.3).
    pub(crate) fn skip_multiline_comment(&mut self, start: Position) {
        self.cursor.advance(); // '/'
        self.cursor.advance(); // '*'

        loop {
            match self.cursor.current() {
                None => {
                    let span = self.span_from(start);
                    self.report(DiagnosticCode::UnterminatedComment, "unterminated multiline comment", span);
                    self.halted = true;
                    return;
                }
                Some('*') => {
                    self.cursor.advance();
                    if self.cursor.current() == Some('/') {
                        self.cursor.advance();
                        return;
                    }
                }
                Some(_) => {
                    self.cursor.advance();
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

    #[test]
    fn multiline_comment_is_skipped_entirely() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("/* a\nb */ 42", &mut handler);
        let tokens = lexer.tokenize();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert!(!handler.has_errors());
    }

    #[test]
    fn unterminated_multiline_comment_reports_and_halts() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("/* never closed", &mut handler);
        let tokens = lexer.tokenize();
        assert!(tokens.is_empty());
        assert!(handler.has_errors());
    }
}
