// src/output/mod.rs

//! Turns the merged stream into the final document and writes run artifacts.
//!
//! - `window` cuts the stream into its front and back windows.
//! - `header` and `document` render the title block and section banners.
//! - `report` renders the human-readable extraction report.
//! - `dry_run` lists the ranked files without producing anything.
//! - `writer` creates the output directory and saves files.

use crate::config::Config;
use crate::core_types::{Document, Extraction};
use chrono::NaiveDateTime;
use log::info;

mod document;
pub mod dry_run;
mod header;
pub mod report;
mod window;
pub mod writer;

pub use document::render_document;
pub use window::split_windows;

/// Builds the paginated `Document` from an extraction result.
///
/// `generated_at` is passed in rather than read from the clock so the same
/// inputs always produce the same document.
pub fn paginate(extraction: &Extraction, config: &Config, generated_at: NaiveDateTime) -> Document {
    let layout = config.pagination;
    let (front_window, back_window) = split_windows(&extraction.merged, &layout);
    let total = extraction.total_lines;

    if total <= layout.total_budget() {
        info!(
            "Stream of {} lines fits the {}-line budget; including all of it.",
            total,
            layout.total_budget()
        );
    } else {
        info!(
            "Stream of {} lines exceeds the {}-line budget; keeping the first {} and last {} lines.",
            total,
            layout.total_budget(),
            front_window.len(),
            back_window.len()
        );
    }

    Document {
        front_window,
        back_window,
        total_source_lines: total,
        layout,
        project_name: config.project_name.clone(),
        generated_at,
    }
}
