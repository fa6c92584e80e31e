//! The diagnostic sink (§4.2).
//!
//! `Handler` is an append-only collector: lexical and syntactic problems are
//! reported into it as they're discovered, but nothing in this module ever
//! aborts a compilation. The caller (the driver) decides what to do once
//! `has_errors()` comes back true.

use std::fmt;

use crate::span::Span;

/// Severity of a diagnostic. Kept as a small enum rather than a bare string
/// so formatting and ordering stay centralized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Error,
    Warning,
    Note,
}

impl Level {
    pub fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The kind of problem a diagnostic reports. Mirrors the error taxonomy of
/// §7: lexical, syntactic, and I/O failures, plus a generic internal note
/// used by the code generator's unknown-node fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticCode {
    SyntaxError,
    UnknownToken,
    UnterminatedString,
    UnterminatedComment,
    FileNotFound,
    ReadFailure,
    Internal,
}

impl DiagnosticCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticCode::SyntaxError => "SyntaxError",
            DiagnosticCode::UnknownToken => "UnknownToken",
            DiagnosticCode::UnterminatedString => "UnterminatedString",
            DiagnosticCode::UnterminatedComment => "UnterminatedComment",
            DiagnosticCode::FileNotFound => "FileNotFound",
            DiagnosticCode::ReadFailure => "ReadFailure",
            DiagnosticCode::Internal => "Internal",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single rendered source line with a caret underline, used when printing
/// a diagnostic with source context.
#[derive(Debug, Clone)]
pub struct SourceSnippet {
    pub line: String,
    pub line_number: u32,
    pub start_column: u32,
    pub end_column: u32,
}

impl SourceSnippet {
    pub fn new(line: impl Into<String>, line_number: u32, start_column: u32, end_column: u32) -> Self {
        SourceSnippet { line: line.into(), line_number, start_column, end_column }
    }

    pub fn format(&self) -> String {
        let gutter = format!("{}", self.line_number);
        let pad = " ".repeat(gutter.len());
        let lead = (self.start_column.saturating_sub(1)) as usize;
        let width = (self.end_column.saturating_sub(self.start_column)).max(1) as usize;
        format!(
            "{gutter} | {line}\n{pad} | {spaces}{carets}",
            gutter = gutter,
            line = self.line,
            pad = pad,
            spaces = " ".repeat(lead),
            carets = "^".repeat(width),
        )
    }
}

/// A fully formed diagnostic: level, message, the code that produced it, the
/// span it refers to, and an optional file path (per §3: "file path or
/// none").
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub level: Level,
    pub code: DiagnosticCode,
    pub message: String,
    pub span: Span,
    pub file_path: Option<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if let Some(path) = &self.file_path {
            write!(f, " File: {}, Line: {}, Column: {}", path, self.span.line, self.span.column)?;
        }
        Ok(())
    }
}

/// Fluent builder for [`Diagnostic`], mirroring the shape of the handler's
/// consumers: construct, optionally attach a span/path, then `build()`.
pub struct DiagnosticBuilder {
    level: Level,
    code: DiagnosticCode,
    message: String,
    span: Span,
    file_path: Option<String>,
}

impl DiagnosticBuilder {
    pub fn new(level: Level, code: DiagnosticCode, message: impl Into<String>) -> Self {
        DiagnosticBuilder { level, code, message: message.into(), span: Span::DUMMY, file_path: None }
    }

    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(Level::Error, code, message)
    }

    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn file(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            code: self.code,
            message: self.message,
            span: self.span,
            file_path: self.file_path,
        }
    }

    /// Builds and files the diagnostic into `handler` in one step.
    pub fn emit(self, handler: &mut Handler) {
        handler.report(self.build());
    }
}

/// Append-only diagnostic collector (§4.2). Reporting never aborts; the
/// caller inspects [`Handler::has_errors`] to decide whether to continue.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    pub fn new() -> Self {
        Handler { diagnostics: Vec::new() }
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level.is_error())
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_accumulates_without_aborting() {
        let mut handler = Handler::new();
        assert!(!handler.has_errors());
        DiagnosticBuilder::error(DiagnosticCode::UnknownToken, "bad char '$'")
            .span(Span::new(0, 1, 1, 1))
            .emit(&mut handler);
        assert!(handler.has_errors());
        assert_eq!(handler.diagnostics().len(), 1);
    }

    #[test]
    fn diagnostic_display_includes_position() {
        let diag = DiagnosticBuilder::error(DiagnosticCode::SyntaxError, "Expected ';'. Got: }")
            .span(Span::new(0, 1, 4, 2))
            .file("demo.l")
            .build();
        let text = diag.to_string();
        assert!(text.contains("SyntaxError"));
        assert!(text.contains("Line: 4"));
        assert!(text.contains("Column: 2"));
    }

    #[test]
    fn snippet_formats_caret_underline() {
        let snippet = SourceSnippet::new("let x = ;", 3, 9, 10);
        let rendered = snippet.format();
        assert!(rendered.contains("3 | let x = ;"));
        assert!(rendered.ends_with('^'));
    }

    #[test]
    fn clear_empties_handler() {
        let mut handler = Handler::new();
        DiagnosticBuilder::error(DiagnosticCode::Internal, "oops").emit(&mut handler);
        handler.clear();
        assert!(!handler.has_errors());
        assert!(handler.diagnostics().is_empty());
    }
}
