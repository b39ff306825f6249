// src/output/writer.rs

//! Writes the document and report into the output directory.

use crate::errors::{write_error_with_path, Result};
use byte_unit::{Byte, UnitType};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Creates the output directory (and any missing parents) if it does not exist.
///
/// # Errors
/// Returns `Error::Write` if the directory cannot be created.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    debug!("Creating output directory {}", dir.display());
    fs::create_dir_all(dir).map_err(|e| write_error_with_path(e, dir))
}

/// Writes `content` to `path`, replacing any existing file, and returns the
/// size of the written file in bytes.
///
/// # Errors
/// Returns `Error::Write` if the file cannot be written.
pub fn save_text(path: &Path, content: &str) -> Result<u64> {
    fs::write(path, content).map_err(|e| write_error_with_path(e, path))?;
    let size = match fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(e) => {
            warn!(
                "Could not read size of {}: {}. Using content length.",
                path.display(),
                e
            );
            content.len() as u64
        }
    };
    debug!("Wrote {} bytes to {}", size, path.display());
    Ok(size)
}

/// Formats a byte count with a binary unit, e.g. `12.34 KiB`.
pub fn format_size(bytes: u64) -> String {
    let adjusted = Byte::from_u64(bytes).get_appropriate_unit(UnitType::Binary);
    format!("{:.2}", adjusted)
}
