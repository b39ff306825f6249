// src/processing/content_reader.rs

use crate::config::TextEncoding;
use crate::errors::{io_error_with_path, Error, Result};
use std::{fs, path::Path};

/// Reads the entire content of a file as text in the configured encoding.
///
/// The result is the typed outcome callers use to decide between including a
/// file and counting it as a failure; it never panics.
///
/// # Errors
/// - `Error::Io` if the file cannot be read.
/// - `Error::Encoding` if `encoding` is strict UTF-8 and the bytes are not valid UTF-8.
pub fn read_text(path: &Path, encoding: TextEncoding) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| io_error_with_path(e, path))?;
    match encoding {
        TextEncoding::Utf8 => String::from_utf8(bytes).map_err(|_| Error::Encoding {
            path: path.display().to_string(),
            encoding: encoding.as_str().to_string(),
        }),
        TextEncoding::Utf8Lossy => Ok(String::from_utf8_lossy(&bytes).into_owned()),
    }
}
