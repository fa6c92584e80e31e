//! lc-lex - Lexical Analyzer
//!
//! Converts source text into a stream of raw lexical tokens (§3, §4.3): an
//! ordered table of rules, tried longest/most-specific first, with
//! whitespace and line/multiline comments skipped inline. Keyword
//! recognition and token-kind renaming are deliberately **not** done here —
//! that's the token normalizer's job (lc-par), so this crate's output is
//! exactly the raw token alphabet described in §3.

pub mod cursor;
pub mod lexer;
pub mod token;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
