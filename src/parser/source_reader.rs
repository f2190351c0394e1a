//! Reading SQL source text from files or stdin

use std::io::Read;
use std::path::{Path, PathBuf};

use encoding_rs::WINDOWS_1252;

use crate::error::Sql2DocError;

/// Decode bytes as UTF-8, falling back to Windows-1252 (common for scripts exported on Windows)
fn decode(bytes: Vec<u8>, path: &Path) -> Result<String, Sql2DocError> {
    match String::from_utf8(bytes) {
        Ok(s) => Ok(s.strip_prefix('\u{feff}').map(str::to_string).unwrap_or(s)),
        Err(err) => {
            let bytes = err.into_bytes();
            let (decoded, _, had_errors) = WINDOWS_1252.decode(&bytes);
            if had_errors {
                Err(Sql2DocError::InputDecodeError {
                    path: path.to_path_buf(),
                })
            } else {
                Ok(decoded.into_owned())
            }
        }
    }
}

/// Read a SQL file, trying UTF-8 first, then Windows-1252
pub fn read_sql_file(path: &Path) -> Result<String, Sql2DocError> {
    let bytes = std::fs::read(path).map_err(|source| Sql2DocError::InputReadError {
        path: path.to_path_buf(),
        source,
    })?;
    decode(bytes, path)
}

/// Read all of stdin as SQL text
pub fn read_sql_stdin() -> Result<String, Sql2DocError> {
    let path = PathBuf::from("<stdin>");
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .map_err(|source| Sql2DocError::InputReadError {
            path: path.clone(),
            source,
        })?;
    decode(bytes, &path)
}
