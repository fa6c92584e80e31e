//! lc-util - Core Utilities and Foundation Types
//!
//! Shared infrastructure used by every stage of the compiler: source
//! positions, the diagnostic sink, and the string interner. None of the
//! compiler phases (lexer, parser, code generator) know how to format or
//! store diagnostics themselves; they all go through [`Handler`].

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod symbol;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use error::{IoError, IoResult};
pub use span::{Position, Span};
pub use symbol::{Interner, Symbol};
