//! lc-drv - Compiler driver
//!
//! Wires the lexer, parser, and code generator into the two CLI entry
//! points described in §6: the batch compiler (`lc`) and the parser REPL
//! (`lc-parse`). Compilation is single-threaded and single-use (§5): a
//! [`Session`] reads its source once, runs the pipeline to completion, and
//! is done.

use std::fs;
use std::path::{Path, PathBuf};

use lc_par::{ParseError, Program};
use lc_util::{Handler, IoError};

/// What to compile and where to put the result. `output_file` is `None`
/// when the caller wants the default `out/<stem>.asm` placement (§6, the
/// one-arg form).
#[derive(Debug, Clone)]
pub struct Config {
    pub source_file: PathBuf,
    pub output_file: Option<PathBuf>,
}

impl Config {
    pub fn new(source_file: impl Into<PathBuf>) -> Self {
        Config { source_file: source_file.into(), output_file: None }
    }

    pub fn with_output(mut self, output_file: impl Into<PathBuf>) -> Self {
        self.output_file = Some(output_file.into());
        self
    }

    /// The path assembly actually gets written to: the explicit
    /// `output_file` if given, otherwise `out/<stem>.asm` alongside the
    /// current directory (§6).
    pub fn resolved_output_path(&self) -> PathBuf {
        match &self.output_file {
            Some(path) => path.clone(),
            None => default_output_path(&self.source_file),
        }
    }
}

/// `out/<stem>.asm` for a given source path (§6, one-arg form).
pub fn default_output_path(source_file: &Path) -> PathBuf {
    let stem = source_file.file_stem().and_then(|s| s.to_str()).unwrap_or("out");
    PathBuf::from("out").join(format!("{stem}.asm"))
}

/// Everything that can abort a compilation (§7): source I/O and syntax
/// errors. A lexical diagnostic never reaches here — it's recorded on the
/// [`Handler`] returned alongside a successful parse and never stops the
/// pipeline.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A single compilation: reads its source file exactly once (§5), then
/// offers the two things a caller needs — the parsed AST (for `lc-parse`)
/// and the generated assembly (for `lc`).
pub struct Session {
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Session { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn read_source(&self) -> Result<String, CompileError> {
        let path = &self.config.source_file;
        if !path.exists() {
            return Err(CompileError::Io(IoError::NotFound(path.clone())));
        }
        fs::read_to_string(path)
            .map_err(|source| CompileError::Io(IoError::ReadFailed { path: path.clone(), source }))
    }

    /// Lexes and parses the configured source, returning the AST plus the
    /// diagnostic sink accumulated along the way (non-fatal lexical
    /// findings live there even on a successful parse).
    pub fn parse(&self) -> Result<(Program, Handler), CompileError> {
        let source = self.read_source()?;
        let mut handler = Handler::new();
        let program = lc_par::parse_source(&source, &mut handler)?;
        Ok((program, handler))
    }

    /// Parses and lowers straight to assembly text; used by the `lc`
    /// binary. Returns the same diagnostic sink as [`Session::parse`] so
    /// the caller can still surface lexical warnings on a clean compile.
    pub fn compile(&self) -> Result<(String, Handler), CompileError> {
        let (program, handler) = self.parse()?;
        let assembly = lc_gen::Generator::new().generate(&program);
        Ok((assembly, handler))
    }

    /// Runs the full compile-and-write pipeline, creating `out/` on demand
    /// for the one-arg form (§6).
    pub fn run(&self) -> Result<(String, Handler), CompileError> {
        let (assembly, handler) = self.compile()?;
        let output_path = self.config.resolved_output_path();
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| {
                    CompileError::Io(IoError::WriteFailed { path: output_path.clone(), source })
                })?;
            }
        }
        fs::write(&output_path, &assembly)
            .map_err(|source| CompileError::Io(IoError::WriteFailed { path: output_path.clone(), source }))?;
        Ok((assembly, handler))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_path_uses_stem_under_out() {
        let path = default_output_path(Path::new("demos/hello.l"));
        assert_eq!(path, PathBuf::from("out/hello.asm"));
    }

    #[test]
    fn explicit_output_overrides_the_default() {
        let config = Config::new("hello.l").with_output("build/a.s");
        assert_eq!(config.resolved_output_path(), PathBuf::from("build/a.s"));
    }

    #[test]
    fn missing_source_reports_not_found() {
        let session = Session::new(Config::new("/no/such/file.l"));
        let err = session.parse().unwrap_err();
        assert!(matches!(err, CompileError::Io(IoError::NotFound(_))));
    }

    #[test]
    fn compiling_valid_source_yields_assembly_and_clean_handler() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.l");
        fs::write(&path, "function main() { println(\"hi\"); }").unwrap();

        let session = Session::new(Config::new(&path));
        let (assembly, handler) = session.compile().unwrap();
        assert!(assembly.contains("dakshin_print"));
        assert!(!handler.has_errors());
    }
}
