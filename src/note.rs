//! Note materialization
//!
//! Names the note, creates it without ever overwriting, and copies the
//! template into it. A copy that does not finish leaves no file behind.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::config::NameScheme;
use crate::error::{NoteError, Result};

/// Destination file name: `<stem>.<extension>`
pub fn compute_file_name(naming: NameScheme, extension: &str) -> String {
    format!("{}.{}", naming.stem(), extension)
}

/// A freshly created note that is removed again unless committed
#[derive(Debug)]
pub struct Destination {
    file: File,
    path: PathBuf,
    committed: bool,
}

impl Destination {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Keep the file on disk and release the handle
    fn commit(mut self) -> PathBuf {
        self.committed = true;
        self.path.clone()
    }
}

impl Drop for Destination {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        if let Err(e) = fs::remove_file(&self.path) {
            warn!(path = %self.path.display(), error = %e, "failed to remove incomplete note");
        }
    }
}

/// Create `store_path/file_name` for writing. Fails if anything exists there.
pub fn create_destination(store_path: &Path, file_name: &str) -> Result<Destination> {
    let path = store_path.join(file_name);

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|source| {
            if source.kind() == io::ErrorKind::AlreadyExists {
                NoteError::AlreadyExists(path.clone())
            } else {
                NoteError::CreateFile {
                    path: path.clone(),
                    source,
                }
            }
        })?;

    Ok(Destination {
        file,
        path,
        committed: false,
    })
}

/// Copy the template's bytes verbatim into the destination.
///
/// Returns the path of the completed note.
pub fn materialize(template: &Path, mut destination: Destination) -> Result<PathBuf> {
    let mut source = File::open(template).map_err(|source| NoteError::OpenTemplate {
        path: template.to_path_buf(),
        source,
    })?;

    let copy_error = |source: io::Error, path: &Path| NoteError::Copy {
        path: path.to_path_buf(),
        source,
    };

    io::copy(&mut source, &mut destination.file)
        .map_err(|e| copy_error(e, &destination.path))?;
    destination
        .file
        .flush()
        .map_err(|e| copy_error(e, &destination.path))?;

    Ok(destination.commit())
}
