//! Command-line pipeline
//!
//! - gen: validate the template, prepare the store, generate the note
pub mod gen;
