//! Store directory preparation
//!
//! Existence checks distinguish "absent" from "cannot tell": only a
//! `NotFound` error means absent, anything else is reported to the caller.

use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

use crate::error::{NoteError, Result};

/// Whether a filesystem entry exists at a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathState {
    Present,
    Absent,
}

/// Stat a path. Only `NotFound` maps to [`PathState::Absent`].
pub fn probe(path: &Path) -> io::Result<PathState> {
    match fs::metadata(path) {
        Ok(_) => Ok(PathState::Present),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(PathState::Absent),
        Err(e) => Err(e),
    }
}

/// Create `path` and any missing parents. No-op if it is already a directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    let store_error = |source: io::Error| NoteError::StorePath {
        path: path.to_path_buf(),
        source,
    };

    match probe(path).map_err(store_error)? {
        PathState::Present if path.is_dir() => Ok(()),
        PathState::Present => Err(store_error(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "path exists and is not a directory",
        ))),
        PathState::Absent => {
            fs::create_dir_all(path).map_err(store_error)?;
            info!(path = %path.display(), "created store directory");
            Ok(())
        }
    }
}
