//! Handles the extraction stage of the `exhibit` pipeline.
//!
//! Each ranked file is read, prefixed with a provenance header naming its
//! relative path, and appended to a single merged stream. Reads run in
//! parallel with Rayon; the merged order is always the ranked order.
//!
//! A file that cannot be read is logged, counted as a failure and skipped.
//! It never aborts the run.

use crate::cancellation::CancellationToken;
use crate::config::Config;
use crate::constants::{
    BLOCK_SEPARATOR, FILE_HEADER_COMMENT_PREFIX, FILE_HEADER_LABEL, FILE_HEADER_SEPARATOR_WIDTH,
};
use crate::core_types::{ClassifiedFile, Extraction, ExtractionFailure, FormattedBlock};
use crate::errors::{Error, Result};
use crate::progress::ProgressReporter;
use log::{debug, error, info};
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

mod content_reader;
mod counter;

pub use content_reader::read_text;
pub use counter::count_lines;

/// Builds the provenance header placed before a file's content.
///
/// # Examples
///
/// ```
/// use exhibit::processing::format_file_header;
///
/// let header = format_file_header("core/router/app_router.dart");
/// let lines: Vec<&str> = header.lines().collect();
/// assert_eq!(lines[1], "// File: core/router/app_router.dart");
/// assert_eq!(lines[0], lines[2]);
/// assert!(header.ends_with('\n'));
/// ```
pub fn format_file_header(relative_path: &str) -> String {
    let rule = "=".repeat(FILE_HEADER_SEPARATOR_WIDTH);
    format!(
        "{prefix}{rule}\n{prefix}{label}: {path}\n{prefix}{rule}\n",
        prefix = FILE_HEADER_COMMENT_PREFIX,
        label = FILE_HEADER_LABEL,
        path = relative_path,
    )
}

/// Wraps raw file content in its provenance header. The content is kept
/// byte-for-byte; no trimming or newline normalization happens here.
pub fn format_block(relative_path: &str, content: &str) -> FormattedBlock {
    let mut block = format_file_header(relative_path);
    block.push_str(content);
    let line_count = count_lines(&block);
    FormattedBlock {
        file_path: relative_path.to_string(),
        content: block,
        line_count,
    }
}

/// Reads every ranked file and merges the formatted blocks into one stream.
///
/// Blocks appear in the order of `files`. Blocks are joined by a single blank
/// line. `total_lines` is the line count of the merged string, so an empty
/// selection yields an empty stream of one line.
///
/// # Errors
/// Returns `Error::Interrupted` if the token is cancelled. Per-file read
/// failures are recorded in the result and do not produce an error.
pub fn extract_and_merge(
    files: &[ClassifiedFile],
    config: &Config,
    token: &CancellationToken,
    progress: Option<&dyn ProgressReporter>,
) -> Result<Extraction> {
    if token.is_cancelled() {
        return Err(Error::Interrupted);
    }
    if let Some(p) = progress {
        p.set_length(files.len() as u64);
        p.set_message("Extracting".to_string());
    }

    let done = AtomicU64::new(0);
    let reads: Vec<Result<String>> = files
        .par_iter()
        .map(|file| {
            if token.is_cancelled() {
                return Err(Error::Interrupted);
            }
            let read = read_text(&file.record.absolute_path, config.encoding);
            if let Some(p) = progress {
                p.set_position(done.fetch_add(1, Ordering::Relaxed) + 1);
            }
            read
        })
        .collect();

    if token.is_cancelled() {
        return Err(Error::Interrupted);
    }

    let mut extraction = Extraction::default();
    for (file, read) in files.iter().zip(reads) {
        match read {
            Ok(content) => {
                let block = format_block(file.relative_path(), &content);
                debug!(
                    "Extracted {} ({} lines with header)",
                    block.file_path, block.line_count
                );
                extraction.blocks.push(block);
                extraction.success_count += 1;
            }
            Err(e) => {
                error!("Failed to read {}: {}", file.relative_path(), e);
                extraction.failures.push(ExtractionFailure {
                    file_path: file.relative_path().to_string(),
                    reason: e.to_string(),
                });
                extraction.error_count += 1;
            }
        }
    }

    extraction.merged = extraction
        .blocks
        .iter()
        .map(|block| block.content.as_str())
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR);
    extraction.total_lines = count_lines(&extraction.merged);

    if let Some(p) = progress {
        p.finish_with_message("Extraction done".to_string());
    }
    info!(
        "Extraction complete: {} succeeded, {} failed",
        extraction.success_count, extraction.error_count
    );
    info!("Merged stream: {} lines", extraction.total_lines);
    Ok(extraction)
}
