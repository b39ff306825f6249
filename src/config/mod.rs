//! Defines the core `Config` struct and related types for application configuration.
//!
//! This module consolidates all the settings merged from defaults, an optional
//! TOML configuration file and the CLI, making them available to the rest of
//! the application in a structured and type-safe manner. A `Config` is
//! read-only once built and is passed explicitly into every pipeline stage.

use crate::classify::ClassificationRule;
use crate::core_types::Category;
use crate::errors::ConfigError;
use std::path::PathBuf;
use std::str::FromStr;

pub use builder::{ConfigBuilder, RuleSpec};
pub use file::{load_config_file, ConfigFile, RuleEntry};
pub use parsing::{parse_weight_override, WeightOverride};
pub use path_resolve::resolve_source_dir;

mod builder;
mod builder_logic;
mod file;
mod parsing;
mod path_resolve;

/// Text encoding used for every read (and the document write).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TextEncoding {
    /// Strict UTF-8: files with invalid byte sequences fail to read.
    Utf8,
    /// UTF-8 with invalid sequences replaced by U+FFFD.
    #[default]
    Utf8Lossy,
}

impl TextEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf8",
            TextEncoding::Utf8Lossy => "utf8-lossy",
        }
    }
}

impl FromStr for TextEncoding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(TextEncoding::Utf8),
            "utf8-lossy" | "utf-8-lossy" => Ok(TextEncoding::Utf8Lossy),
            other => Err(ConfigError::InvalidValue {
                option: "encoding".to_string(),
                reason: format!("unsupported encoding '{}' (expected utf8 or utf8-lossy)", other),
            }),
        }
    }
}

/// Mapping from category to priority weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityWeights {
    pub entry: u32,
    pub core: u32,
    pub feature: u32,
    pub ui: u32,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            entry: 10,
            core: 8,
            feature: 6,
            ui: 4,
        }
    }
}

impl PriorityWeights {
    /// Looks up the weight for a category.
    pub fn weight(&self, category: Category) -> u32 {
        match category {
            Category::Entry => self.entry,
            Category::Core => self.core,
            Category::Feature => self.feature,
            Category::Ui => self.ui,
        }
    }

    pub fn set(&mut self, category: Category, weight: u32) {
        match category {
            Category::Entry => self.entry = weight,
            Category::Core => self.core = weight,
            Category::Feature => self.feature = weight,
            Category::Ui => self.ui = weight,
        }
    }
}

/// Configuration for the filter, classifier and ranker.
#[derive(Debug, Clone)]
pub struct SelectionConfig {
    /// Accepted path suffixes, each starting with a dot (e.g. `.dart`).
    pub include_extensions: Vec<String>,
    /// Substrings that disqualify a relative path. Takes precedence over `include_extensions`.
    pub exclude_patterns: Vec<String>,
    /// Ordered classification rules; the first match wins, `UI` otherwise.
    pub rules: Vec<ClassificationRule>,
    pub weights: PriorityWeights,
}

/// Page budget for the front and back sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    pub lines_per_page: usize,
    pub pages_front: usize,
    pub pages_back: usize,
}

impl PaginationConfig {
    pub fn front_budget(&self) -> usize {
        self.lines_per_page * self.pages_front
    }

    pub fn back_budget(&self) -> usize {
        self.lines_per_page * self.pages_back
    }

    /// Largest stream that is included whole.
    pub fn total_budget(&self) -> usize {
        self.front_budget() + self.back_budget()
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            lines_per_page: crate::constants::DEFAULT_LINES_PER_PAGE,
            pages_front: crate::constants::DEFAULT_PAGES_FRONT,
            pages_back: crate::constants::DEFAULT_PAGES_BACK,
        }
    }
}

/// Represents the fully resolved configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the tree to scan. Resolved (and checked for existence) at scan time.
    pub source_dir: PathBuf,
    /// Directory the document and report are written into. Created if absent.
    pub output_dir: PathBuf,
    /// File name of the document inside `output_dir`.
    pub output_file: String,
    /// File name of the report inside `output_dir`; `None` disables the report.
    pub report_file: Option<String>,
    /// Embedded in the document title.
    pub project_name: String,
    pub encoding: TextEncoding,
    pub selection: SelectionConfig,
    pub pagination: PaginationConfig,
    /// Number of top-ranked files listed in logs and the report.
    pub top_files: usize,
    /// If `true`, print the ranked file list and write nothing.
    pub dry_run: bool,
}

impl Config {
    /// Full path of the document.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    /// Full path of the report, if enabled.
    pub fn report_path(&self) -> Option<PathBuf> {
        self.report_file.as_ref().map(|name| self.output_dir.join(name))
    }

    /// Creates a default `Config` for testing purposes.
    ///
    /// This function is hidden from public documentation and is intended for
    /// use in tests and doc tests only.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            source_dir: PathBuf::from(crate::constants::DEFAULT_SOURCE_DIR),
            output_dir: PathBuf::from(crate::constants::DEFAULT_OUTPUT_DIR),
            output_file: crate::constants::DEFAULT_OUTPUT_FILE.to_string(),
            report_file: None,
            project_name: "Test Project".to_string(),
            encoding: TextEncoding::Utf8Lossy,
            selection: SelectionConfig {
                include_extensions: vec![".dart".to_string()],
                exclude_patterns: crate::constants::DEFAULT_EXCLUDE_PATTERNS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                rules: crate::classify::default_rules().to_vec(),
                weights: PriorityWeights::default(),
            },
            pagination: PaginationConfig::default(),
            top_files: crate::constants::DEFAULT_TOP_FILES,
            dry_run: false,
        }
    }
}
