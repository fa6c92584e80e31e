//! Character cursor for traversing source code.
//!
//! Maintains byte position plus 1-based line/column while walking a `&str`
//! char by char, per §4.1's Source Reader: `current()` returns the char at
//! the cursor or `None` at EOF, `advance()` consumes one char and updates
//! line/column (`\n` ⇒ new line; else column + 1).

use lc_util::Position;

#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: Position,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor { source, pos: Position::start() }
    }

    /// The remaining, not-yet-consumed source text.
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos.offset..]
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn offset(&self) -> usize {
        self.pos.offset
    }

    pub fn is_at_end(&self) -> bool {
        self.pos.offset >= self.source.len()
    }

    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn peek_at(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Consumes and returns the current char, updating line/column.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.current()?;
        self.pos.advance(ch);
        Some(ch)
    }

    /// Advances the cursor to an absolute byte offset, updating line/column
    /// by walking every char in between. Used once a sub-lexer has matched a
    /// multi-char token and knows where it ends.
    pub fn advance_to(&mut self, target_offset: usize) {
        while self.pos.offset < target_offset && !self.is_at_end() {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_tracks_line_and_column() {
        let mut cur = Cursor::new("ab\ncd");
        assert_eq!(cur.current(), Some('a'));
        cur.advance();
        cur.advance();
        cur.advance(); // consumes '\n'
        assert_eq!(cur.position().line, 2);
        assert_eq!(cur.position().column, 1);
        assert_eq!(cur.current(), Some('c'));
    }

    #[test]
    fn is_at_end_after_full_consume() {
        let mut cur = Cursor::new("ab");
        cur.advance();
        cur.advance();
        assert!(cur.is_at_end());
        assert_eq!(cur.current(), None);
    }

    #[test]
    fn advance_to_skips_multiple_chars() {
        let mut cur = Cursor::new("hello world");
        cur.advance_to(5);
        assert_eq!(cur.current(), Some(' '));
        assert_eq!(cur.position().column, 6);
    }
}
