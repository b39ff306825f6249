//! `exhibit` is a library and command-line tool that turns a project's source
//! tree into a fixed-size source code exhibit for software copyright
//! registration.
//!
//! Registration offices usually ask for the first and last N pages of a
//! program's source. `exhibit` decides which code appears on those pages by
//! ranking files by architectural importance, so entry points and core
//! infrastructure lead the document instead of whatever sorts first
//! alphabetically.
//!
//! As a library, it provides a linear pipeline whose stages can be used on
//! their own:
//! 1.  **Scan**: list every regular file under the source directory.
//! 2.  **Select**: keep files with accepted extensions, classify them
//!     (ENTRY, CORE, FEATURE, UI) and rank them.
//! 3.  **Extract**: read each ranked file, prefix it with a provenance header
//!     and merge everything into one stream.
//! 4.  **Paginate**: keep the whole stream if it fits the page budget,
//!     otherwise its first and last pages, and render the final document.
//!
//! # Example: Library Usage
//!
//! ```
//! use exhibit::prelude::{execute, render_document, CancellationToken, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Set up a small source tree.
//! let temp_dir = tempdir()?;
//! let lib = temp_dir.path().join("lib");
//! fs::create_dir_all(lib.join("core/models"))?;
//! fs::write(lib.join("main.dart"), "void main() {}\n")?;
//! fs::write(lib.join("core/models/user.dart"), "class User {}\n")?;
//! fs::write(lib.join("core/models/user.g.dart"), "// generated\n")?;
//!
//! // 2. Build a configuration.
//! let config = ConfigBuilder::new()
//!     .source_dir(lib.to_str().unwrap())
//!     .project_name("Demo")
//!     .build()?;
//!
//! // 3. Run the pipeline without writing anything.
//! let token = CancellationToken::new();
//! let generated_at = chrono::Local::now().naive_local();
//! let result = execute(&config, &token, None, generated_at)?;
//!
//! // The entry point outranks the model; the generated file was excluded.
//! assert_eq!(result.files.len(), 2);
//! assert_eq!(result.files[0].relative_path(), "main.dart");
//!
//! let text = render_document(&result.document);
//! assert!(text.contains("// File: core/models/user.dart"));
//! # Ok(())
//! # }
//! ```

pub mod cancellation;
pub mod classify;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod prelude;
pub mod processing;
pub mod progress;
pub mod ranking;
pub mod signal;

// Re-export key public types for easier use as a library
pub use cancellation::CancellationToken;
pub use config::{Config, ConfigBuilder};
pub use core_types::{Category, ClassifiedFile, Document, Extraction, FileRecord};

use crate::errors::{write_error_with_path, Result};
use crate::output::dry_run::{format_ranked_entry, write_dry_run_output};
use crate::output::writer::{ensure_output_dir, format_size, save_text};
use crate::progress::ProgressReporter;
use chrono::{Local, NaiveDateTime};
use log::{info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::instrument;

/// Everything a pipeline run produced, before anything is written.
#[derive(Debug, Clone)]
pub struct ExhibitResult {
    /// Number of regular files found by the scan.
    pub scanned_count: usize,
    /// Eligible files in ranked order.
    pub files: Vec<ClassifiedFile>,
    pub extraction: Extraction,
    pub document: Document,
}

impl ExhibitResult {
    /// Scanned files rejected by the extension or exclusion filters.
    pub fn excluded_count(&self) -> usize {
        self.scanned_count.saturating_sub(self.files.len())
    }
}

/// Paths and size of a saved document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedDocument {
    pub document_path: PathBuf,
    /// `None` if the report was disabled or could not be written.
    pub report_path: Option<PathBuf>,
    /// Size of the document file in bytes.
    pub bytes: u64,
}

/// The outcome of `run`.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// A dry run listed the ranked files and wrote nothing.
    DryRun { files: Vec<ClassifiedFile> },
    /// The document was rendered and saved.
    Saved(SavedDocument),
}

/// Lists every regular file under `config.source_dir`.
///
/// This is the first stage of the pipeline. No file content is read.
///
/// # Errors
/// Returns `Error::SourceNotFound` if the source directory does not exist,
/// or `Error::Interrupted` if cancelled.
pub fn scan(config: &Config, token: &CancellationToken) -> Result<Vec<FileRecord>> {
    let files = discovery::scan_directory(&config.source_dir, token)?;
    info!("Scanned {} files under {}", files.len(), config.source_dir.display());
    Ok(files)
}

/// Filters, classifies and ranks scanned files.
///
/// This is the second stage of the pipeline. The returned files are in
/// ranked order. Counts per category, the total line count and the top
/// `config.top_files` files are logged.
///
/// # Errors
/// Returns `Error::Interrupted` if cancelled.
#[instrument(level = "debug", skip_all, fields(scanned = files.len()))]
pub fn select(
    files: Vec<FileRecord>,
    config: &Config,
    token: &CancellationToken,
) -> Result<Vec<ClassifiedFile>> {
    let scanned = files.len();
    let eligible = filtering::filter_files(files, &config.selection);
    info!(
        "Selected {} eligible files ({} excluded)",
        eligible.len(),
        scanned - eligible.len()
    );
    if eligible.is_empty() {
        warn!("No eligible files found; the document will contain no source code.");
    }

    let classified = classify::classify_files(eligible, config, token)?;
    for (category, count) in classify::category_counts(&classified) {
        info!("  {}: {} files", category, count);
    }
    let total_lines: usize = classified.iter().map(|f| f.line_count).sum();
    info!("Total lines in eligible files: {}", total_lines);

    let ranked = ranking::rank_files(classified);
    if !ranked.is_empty() {
        info!("Top {} files:", config.top_files.min(ranked.len()));
        for (index, file) in ranked.iter().take(config.top_files).enumerate() {
            info!("  {}", format_ranked_entry(index + 1, file));
        }
    }
    Ok(ranked)
}

/// Reads the ranked files and merges them into one stream.
///
/// This is the third stage of the pipeline. Unreadable files are counted and
/// skipped.
///
/// # Errors
/// Returns `Error::Interrupted` if cancelled.
pub fn extract(
    files: &[ClassifiedFile],
    config: &Config,
    token: &CancellationToken,
    progress: Option<&dyn ProgressReporter>,
) -> Result<Extraction> {
    processing::extract_and_merge(files, config, token, progress)
}

/// Cuts the merged stream to the page budget and builds the `Document`.
///
/// This is the final stage of the pipeline. Use `output::render_document` to
/// turn the result into text.
pub fn paginate(extraction: &Extraction, config: &Config, generated_at: NaiveDateTime) -> Document {
    output::paginate(extraction, config, generated_at)
}

/// Executes the complete pipeline (scan, select, extract, paginate) without
/// writing anything.
///
/// # Arguments
/// * `config` - The configuration for the entire run.
/// * `token` - A `CancellationToken` to allow for graceful interruption.
/// * `progress` - An optional progress reporter for the extraction stage.
/// * `generated_at` - Timestamp shown in the document title.
///
/// # Errors
/// Returns `Error::SourceNotFound` if the source directory is missing and
/// `Error::Interrupted` if cancelled. Per-file read failures are recorded in
/// the extraction and never returned as errors.
#[instrument(level = "debug", skip_all, fields(source = %config.source_dir.display()))]
pub fn execute(
    config: &Config,
    token: &CancellationToken,
    progress: Option<Arc<dyn ProgressReporter>>,
    generated_at: NaiveDateTime,
) -> Result<ExhibitResult> {
    let scanned = scan(config, token)?;
    let scanned_count = scanned.len();
    let files = select(scanned, config, token)?;
    let extraction = extract(&files, config, token, progress.as_deref())?;
    let document = paginate(&extraction, config, generated_at);
    Ok(ExhibitResult {
        scanned_count,
        files,
        extraction,
        document,
    })
}

/// Runs the tool the way the command line does.
///
/// For a dry run, the ranked file list is printed to stdout and nothing is
/// written. Otherwise the output directory is created, the pipeline runs,
/// and the document (plus, unless disabled, the report) is saved.
///
/// # Errors
/// Returns `Error::SourceNotFound`, `Error::Write` if the output directory or
/// document cannot be written, or `Error::Interrupted`. A report that cannot
/// be written is only logged.
pub fn run(
    config: &Config,
    token: &CancellationToken,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<RunOutcome> {
    log_config_summary(config);

    if config.dry_run {
        let scanned = scan(config, token)?;
        let files = select(scanned, config, token)?;
        let stdout = std::io::stdout();
        let mut writer = stdout.lock();
        write_dry_run_output(&mut writer, &files)
            .map_err(|e| write_error_with_path(e, "<stdout>"))?;
        return Ok(RunOutcome::DryRun { files });
    }

    ensure_output_dir(&config.output_dir)?;
    let result = execute(config, token, progress, Local::now().naive_local())?;

    let document_path = config.output_path();
    let bytes = save_text(&document_path, &output::render_document(&result.document))?;
    info!(
        "Saved document: {} ({})",
        document_path.display(),
        format_size(bytes)
    );

    let report_path = config.report_path().and_then(|path| {
        let report = output::report::render_report(&result, config);
        match save_text(&path, &report) {
            Ok(_) => {
                info!("Saved report: {}", path.display());
                Some(path)
            }
            Err(e) => {
                warn!("Could not write report: {}", e);
                None
            }
        }
    });

    Ok(RunOutcome::Saved(SavedDocument {
        document_path,
        report_path,
        bytes,
    }))
}

fn log_config_summary(config: &Config) {
    info!("Project: {}", config.project_name);
    info!("Source directory: {}", config.source_dir.display());
    info!("Output directory: {}", config.output_dir.display());
    info!(
        "Page budget: {} lines per page, front {} pages + back {} pages",
        config.pagination.lines_per_page, config.pagination.pages_front, config.pagination.pages_back
    );
}
