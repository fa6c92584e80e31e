//! Lexer module.
//!
//! Organized into smaller, focused components, one per token category:
//! - `core` - main `Lexer` struct, the ordered dispatch, and `tokenize`
//! - `comment` - line and multiline comment skipping
//! - `string` - string and regex literal scanning
//! - `number` - binary/hex/float/integer literal scanning
//! - `identifier` - identifier scanning
//! - `operator` - operator and punctuation scanning

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Lexer;
