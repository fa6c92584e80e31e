//! Error types for the parts of the pipeline that must actually abort
//! (rather than just record a diagnostic and keep going) — currently just
//! source-file I/O (§4.1, §7).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("unable to read {path}: {source}")]
    ReadFailed { path: PathBuf, #[source] source: std::io::Error },

    #[error("unable to write {path}: {source}")]
    WriteFailed { path: PathBuf, #[source] source: std::io::Error },
}

pub type IoResult<T> = Result<T, IoError>;
