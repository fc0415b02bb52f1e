use chrono::NaiveDate;
use std::path::PathBuf;

/// Literal stem used when notes are not named by date
pub const DEFAULT_FILE_STEM: &str = "default";

/// strftime pattern for date-named notes (`20240501`)
pub const DATE_STEM_FORMAT: &str = "%Y%m%d";

/// Daynote configuration, built once at startup and never mutated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Template whose bytes are copied into the new note
    pub template: PathBuf,

    /// Directory the note is generated in
    pub store_path: PathBuf,

    /// How the note file is named
    pub naming: NameScheme,

    /// File extension without the leading dot
    pub extension: String,

    /// Block until interrupted after the note is generated
    pub wait: bool,
}

/// Naming scheme for the generated note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameScheme {
    /// `YYYYMMDD` of the given day
    Date(NaiveDate),
    /// The fixed stem `default`
    Fixed,
}

impl NameScheme {
    /// File stem (name without extension) for this scheme
    pub fn stem(&self) -> String {
        match self {
            NameScheme::Date(date) => date.format(DATE_STEM_FORMAT).to_string(),
            NameScheme::Fixed => DEFAULT_FILE_STEM.to_string(),
        }
    }
}
