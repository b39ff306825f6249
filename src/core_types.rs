//! Defines core data structures used throughout the application pipeline.
//!
//! Each stage produces one of these types and the next stage consumes it:
//! `FileRecord` (scan) → `ClassifiedFile` (classify and rank) →
//! `FormattedBlock` / `Extraction` (extract) → `Document` (paginate).

use crate::config::PaginationConfig;
use crate::errors::ConfigError;
use chrono::NaiveDateTime;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// A regular file discovered under the source directory.
///
/// # Examples
///
/// ```
/// use exhibit::core_types::FileRecord;
/// use std::path::PathBuf;
///
/// let record = FileRecord {
///     relative_path: "core/database/db.dart".to_string(),
///     absolute_path: PathBuf::from("/project/lib/core/database/db.dart"),
/// };
/// assert!(record.relative_path.starts_with("core/"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// The path relative to the scan root, with separators normalized to `/`.
    /// Used for filtering, classification, ranking and the provenance header.
    pub relative_path: String,
    /// The path used for reading the file.
    pub absolute_path: PathBuf,
}

/// The architectural role of a file. Rules are checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Program entry points (`main.dart`, `app.dart`, ...).
    Entry,
    /// Core infrastructure (database, services, router, models).
    Core,
    /// Per-feature business logic.
    Feature,
    /// Presentation layer, and the default for everything else.
    Ui,
}

impl Category {
    /// All categories, in rule-check order.
    pub const ALL: [Category; 4] = [
        Category::Entry,
        Category::Core,
        Category::Feature,
        Category::Ui,
    ];

    /// The upper-case name used in configuration, logs and the report.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Entry => "ENTRY",
            Category::Core => "CORE",
            Category::Feature => "FEATURE",
            Category::Ui => "UI",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ENTRY" => Ok(Category::Entry),
            "CORE" => Ok(Category::Core),
            "FEATURE" => Ok(Category::Feature),
            "UI" => Ok(Category::Ui),
            _ => Err(ConfigError::UnknownCategory(s.to_string())),
        }
    }
}

/// A `FileRecord` with its category, priority weight and line count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedFile {
    pub record: FileRecord,
    pub category: Category,
    /// Weight looked up from `category`; higher sorts first.
    pub priority: u32,
    /// Number of `\n`-separated segments in the raw content.
    /// A trailing newline counts as one more (empty) line.
    pub line_count: usize,
}

impl ClassifiedFile {
    /// Shorthand for the record's relative path.
    pub fn relative_path(&self) -> &str {
        &self.record.relative_path
    }
}

/// One file's provenance header followed by its raw content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedBlock {
    /// The original relative path, as shown in the header.
    pub file_path: String,
    /// Header text concatenated with the raw file content.
    pub content: String,
    /// Line count of `content`, same convention as `ClassifiedFile::line_count`.
    pub line_count: usize,
}

/// A file that could not be read during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionFailure {
    pub file_path: String,
    pub reason: String,
}

/// The result of the extraction stage.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Blocks for successfully read files, in ranked order.
    pub blocks: Vec<FormattedBlock>,
    /// All block contents joined by one blank line.
    pub merged: String,
    /// Line count of `merged`.
    pub total_lines: usize,
    pub success_count: usize,
    pub error_count: usize,
    pub failures: Vec<ExtractionFailure>,
}

/// The final paginated artifact.
///
/// `front_window` and `back_window` never overlap. When the stream fits the
/// budget the whole stream is the front window and `back_window` is empty.
/// With `pages_back = 0` an over-budget stream keeps only its front window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub front_window: Vec<String>,
    pub back_window: Vec<String>,
    /// Total lines of the merged stream before windowing.
    pub total_source_lines: usize,
    pub layout: PaginationConfig,
    pub project_name: String,
    pub generated_at: NaiveDateTime,
}

impl Document {
    /// Number of content lines that made it into the document.
    pub fn included_lines(&self) -> usize {
        self.front_window.len() + self.back_window.len()
    }

    /// `true` if the stream exceeded the combined budget and was cut.
    pub fn is_windowed(&self) -> bool {
        self.total_source_lines > self.layout.total_budget()
    }

    /// Last line number (1-based) covered by the front window.
    pub fn front_end_line(&self) -> usize {
        if self.is_windowed() {
            self.layout.front_budget()
        } else {
            self.total_source_lines
        }
    }

    /// First line number (1-based) covered by the back window, if any.
    pub fn back_start_line(&self) -> Option<usize> {
        (!self.back_window.is_empty())
            .then(|| self.total_source_lines - self.back_window.len() + 1)
    }
}
