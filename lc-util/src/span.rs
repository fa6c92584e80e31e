//! Source positions and spans.
//!
//! The source reader (§4.1) tracks line/column as it advances; every token
//! and AST node carries a [`Span`] computed from that tracking so later
//! diagnostics can point back at the exact source text.

/// A single point in the source: 1-based line and column, plus the byte
/// offset from the start of the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: usize,
}

impl Position {
    pub const fn start() -> Self {
        Position { line: 1, column: 1, offset: 0 }
    }

    /// Advances this position past `ch`, following the `\n` ⇒ new line rule.
    pub fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.offset += ch.len_utf8();
    }
}

/// A half-open byte range `[start, end)` in the source text, tagged with the
/// line/column of its first byte for error reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub const DUMMY: Span = Span { start: 0, end: 0, line: 0, column: 0 };

    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Span { start, end, line, column }
    }

    /// A zero-width span at a single position, used for EOF and synthetic nodes.
    pub fn point(pos: Position) -> Self {
        Span { start: pos.offset, end: pos.offset, line: pos.line, column: pos.column }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Smallest span covering both `self` and `other`; keeps `self`'s start
    /// position for the line/column the caller reports.
    pub fn merge(&self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: self.line,
            column: self.column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_advance_tracks_newlines() {
        let mut pos = Position::start();
        for ch in "ab\ncd".chars() {
            pos.advance(ch);
        }
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 3);
        assert_eq!(pos.offset, 5);
    }

    #[test]
    fn span_merge_takes_outer_bounds() {
        let a = Span::new(5, 10, 1, 6);
        let b = Span::new(2, 7, 1, 3);
        let merged = a.merge(b);
        assert_eq!(merged.start, 2);
        assert_eq!(merged.end, 10);
    }

    #[test]
    fn span_is_empty_for_point() {
        let p = Span::point(Position::start());
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
    }
}
