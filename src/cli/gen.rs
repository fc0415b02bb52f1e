use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::note;
use crate::store;

/// Generate the note described by `config` and return its path
pub fn run(config: &Config) -> Result<PathBuf> {
    // Ensure store directory exists
    store::ensure_directory(&config.store_path)?;

    // Create the note, refusing to overwrite
    let file_name = note::compute_file_name(config.naming, &config.extension);
    let destination = note::create_destination(&config.store_path, &file_name)?;
    debug!(path = %destination.path().display(), "created destination");

    // Copy template bytes; an incomplete note is removed on failure
    let path = note::materialize(&config.template, destination)?;

    info!(path = %path.display(), "generated file");
    Ok(path)
}
