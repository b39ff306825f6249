//! The `exhibit` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types and functions from the
//! `exhibit` library, so a single glob import covers building a
//! configuration, running the pipeline and rendering the document.
//!
//! # Example
//!
//! ```
//! use exhibit::prelude::*;
//! # fn main() -> Result<()> {
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("main.dart"), "void main() {}").unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .source_dir(dir.path().to_str().unwrap())
//!     .build()?;
//! let token = CancellationToken::new();
//!
//! let files = select(scan(&config, &token)?, &config, &token)?;
//! assert_eq!(files[0].category, Category::Entry);
//! # Ok(())
//! # }
//! ```

pub use crate::cancellation::CancellationToken;
pub use crate::classify::{categorize, default_rules, ClassificationRule};
pub use crate::config::{Config, ConfigBuilder, PaginationConfig, TextEncoding};
pub use crate::core_types::{
    Category, ClassifiedFile, Document, Extraction, FileRecord, FormattedBlock,
};
pub use crate::errors::{Error, Result};
pub use crate::filtering::passes_filters;
pub use crate::output::{render_document, split_windows};
pub use crate::processing::{count_lines, format_file_header};
pub use crate::progress::{NoOpProgress, ProgressReporter};
pub use crate::ranking::rank_files;
pub use crate::{
    execute, extract, paginate, run, scan, select, ExhibitResult, RunOutcome, SavedDocument,
};
