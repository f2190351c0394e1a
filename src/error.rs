//! Error types for sql2asciidoc
//!
//! Extraction itself never fails; these cover the file-level pipeline around it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading SQL or writing rendered output
#[derive(Error, Debug)]
pub enum Sql2DocError {
    #[error("Failed to read SQL input: {path}")]
    InputReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("SQL input is neither UTF-8 nor Windows-1252: {path}")]
    InputDecodeError { path: PathBuf },

    #[error("Failed to write output to {path}")]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid title characters: {value:?} (expected at least one character)")]
    InvalidTitleChars { value: String },
}
