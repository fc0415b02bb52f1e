//! Configuration module
//!
//! Turns parsed command-line flags into an immutable [`Config`] and runs the
//! pre-flight template check. There is no configuration file.

mod types;

pub use types::{Config, NameScheme};

use chrono::{Local, NaiveDate};
use std::path::Path;
use tracing::warn;

use crate::error::{NoteError, Result};
use crate::store::{self, PathState};

/// Check that the template path refers to an existing filesystem entry.
///
/// A path that cannot be inspected counts as missing.
pub fn check_template(path: &Path) -> Result<()> {
    match store::probe(path) {
        Ok(PathState::Present) => Ok(()),
        Ok(PathState::Absent) => Err(NoteError::TemplateMissing(path.to_path_buf())),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot inspect template file");
            Err(NoteError::TemplateMissing(path.to_path_buf()))
        }
    }
}

/// Resolve the naming scheme, reading the clock only when no date is given
pub fn naming(use_date: bool, date: Option<&str>) -> Result<NameScheme> {
    if !use_date {
        return Ok(NameScheme::Fixed);
    }

    let date = match date {
        Some(date_str) => NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|e| NoteError::Config(format!("Invalid date format: {}", e)))?,
        None => Local::now().date_naive(),
    };

    Ok(NameScheme::Date(date))
}
