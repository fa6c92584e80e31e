//! lc-gen - Code generator
//!
//! Lowers a parsed [`lc_par::ast::Program`] directly to NASM-compatible
//! x86-64 assembly, Windows x64 calling convention (§4.6). A single AST
//! walk, no intermediate representation: every `Generator::generate_*`
//! method both decides what to emit and emits it.

pub mod codegen;
pub mod stdlib;

pub use codegen::Generator;
pub use stdlib::StandardLibrary;
