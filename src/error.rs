use std::path::PathBuf;
use thiserror::Error;

/// Exit status for any failure before the note is generated (`-1` as a byte).
pub const SETUP_FAILURE_EXIT: i32 = 255;

/// Daynote error types
#[derive(Error, Debug)]
pub enum NoteError {
    #[error("template file {0:?} not exist")]
    TemplateMissing(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Create store path error: {}: {source}", .path.display())]
    StorePath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file {0:?} exist")]
    AlreadyExists(PathBuf),

    #[error("Create file error: {}: {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Open template file error: {}: {source}", .path.display())]
    OpenTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Generate file {path:?} error: {source}")]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Signal handler error: {0}")]
    Signal(#[source] std::io::Error),
}

impl NoteError {
    /// Process exit status for this error.
    ///
    /// Every error is terminal, so they all share one status.
    pub fn exit_code(&self) -> i32 {
        SETUP_FAILURE_EXIT
    }
}

/// Result type for daynote operations
pub type Result<T> = std::result::Result<T, NoteError>;
