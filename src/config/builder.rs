// src/config/builder.rs

use super::builder_logic::{compile_rules, ensure_distinct_outputs, validate_builder_options};
use super::file::{load_config_file, ConfigFile};
use super::parsing::{normalize_extensions, normalize_patterns};
use super::{Config, PaginationConfig, PriorityWeights, SelectionConfig, TextEncoding};
use crate::cli::Cli;
use crate::constants;
use crate::core_types::Category;
use crate::errors::Result;
use std::path::{Path, PathBuf};

/// An unparsed classification rule: a category and its regex source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    pub category: Category,
    pub pattern: String,
}

/// A builder for creating a `Config` programmatically.
///
/// Values are layered: anything left unset falls back to the defaults in
/// `constants`. `from_file` and `from_cli` fill a builder from a configuration
/// file and from parsed arguments respectively; CLI values win over file values.
///
/// # Examples
///
/// ```
/// use exhibit::config::ConfigBuilder;
/// use exhibit::core_types::Category;
///
/// let config = ConfigBuilder::new()
///     .source_dir("lib")
///     .project_name("Inventory Manager")
///     .pages_front(10)
///     .priority_weight(Category::Core, 9)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.pagination.front_budget(), 500);
/// assert_eq!(config.selection.weights.core, 9);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    pub(super) source_dir: Option<String>,
    pub(super) output_dir: Option<String>,
    pub(super) output_file: Option<String>,
    pub(super) report_file: Option<String>,
    pub(super) no_report: Option<bool>,
    pub(super) project_name: Option<String>,
    pub(super) encoding: Option<TextEncoding>,
    pub(super) lines_per_page: Option<usize>,
    pub(super) pages_front: Option<usize>,
    pub(super) pages_back: Option<usize>,
    pub(super) include_extensions: Option<Vec<String>>,
    pub(super) exclude_patterns: Option<Vec<String>>,
    pub(super) weight_overrides: Vec<(Category, u32)>,
    pub(super) rules: Option<Vec<RuleSpec>>,
    pub(super) top_files: Option<usize>,
    pub(super) dry_run: Option<bool>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with every option unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-filled from a TOML configuration file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be loaded, or names an unknown
    /// category or encoding.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = load_config_file(path)?;
        Self::new().merge_file(file)
    }

    /// Applies every key present in `file` on top of this builder.
    pub fn merge_file(mut self, file: ConfigFile) -> Result<Self> {
        self.source_dir = file.source_dir.or(self.source_dir);
        self.output_dir = file.output_dir.or(self.output_dir);
        self.output_file = file.output_file.or(self.output_file);
        self.report_file = file.report_file.or(self.report_file);
        self.project_name = file.project_name.or(self.project_name);
        if let Some(encoding) = file.encoding {
            self.encoding = Some(encoding.parse::<TextEncoding>()?);
        }
        self.lines_per_page = file.lines_per_page.or(self.lines_per_page);
        self.pages_front = file.pages_front.or(self.pages_front);
        self.pages_back = file.pages_back.or(self.pages_back);
        self.include_extensions = file.include_extensions.or(self.include_extensions);
        self.exclude_patterns = file.exclude_patterns.or(self.exclude_patterns);
        for (name, weight) in file.priority_weights.unwrap_or_default() {
            self.weight_overrides.push((name.parse::<Category>()?, weight));
        }
        if let Some(entries) = file.rules {
            let rules = entries
                .into_iter()
                .map(|entry| {
                    Ok(RuleSpec {
                        category: entry.category.parse::<Category>()?,
                        pattern: entry.pattern,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            self.rules = Some(rules);
        }
        self.top_files = file.top_files.or(self.top_files);
        Ok(self)
    }

    /// Creates a builder from parsed CLI arguments, loading `--config` first if given.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let mut builder = match &cli.config {
            Some(path) => Self::from_file(Path::new(path))?,
            None => Self::new(),
        };

        if let Some(source_dir) = cli.source_dir {
            builder = builder.source_dir(source_dir);
        }
        if let Some(output_dir) = cli.output_dir {
            builder = builder.output_dir(output_dir);
        }
        if let Some(output_file) = cli.output_file {
            builder = builder.output_file(output_file);
        }
        if let Some(report_file) = cli.report_file {
            builder = builder.report_file(report_file);
        }
        if cli.no_report {
            builder = builder.no_report(true);
        }
        if let Some(project_name) = cli.project_name {
            builder = builder.project_name(project_name);
        }
        if let Some(encoding) = cli.encoding {
            builder = builder.encoding(encoding);
        }
        if let Some(lines) = cli.lines_per_page {
            builder = builder.lines_per_page(lines);
        }
        if let Some(pages) = cli.pages_front {
            builder = builder.pages_front(pages);
        }
        if let Some(pages) = cli.pages_back {
            builder = builder.pages_back(pages);
        }
        if let Some(exts) = cli.extensions {
            builder = builder.include_extensions(exts);
        }
        if let Some(patterns) = cli.exclude_patterns {
            builder = builder.exclude_patterns(patterns);
        }
        for weight in cli.weights {
            builder = builder.priority_weight(weight.category, weight.weight);
        }
        if let Some(top) = cli.top_files {
            builder = builder.top_files(top);
        }
        Ok(builder.dry_run(cli.dry_run))
    }

    /// Sets the directory to scan.
    pub fn source_dir(mut self, path: impl Into<String>) -> Self {
        self.source_dir = Some(path.into());
        self
    }

    /// Sets the directory the document and report are written into.
    pub fn output_dir(mut self, path: impl Into<String>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Sets the document's file name.
    pub fn output_file(mut self, name: impl Into<String>) -> Self {
        self.output_file = Some(name.into());
        self
    }

    /// Sets the report's file name.
    pub fn report_file(mut self, name: impl Into<String>) -> Self {
        self.report_file = Some(name.into());
        self
    }

    /// Disables writing the report.
    pub fn no_report(mut self, no_report: bool) -> Self {
        self.no_report = Some(no_report);
        self
    }

    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    pub fn lines_per_page(mut self, lines: usize) -> Self {
        self.lines_per_page = Some(lines);
        self
    }

    pub fn pages_front(mut self, pages: usize) -> Self {
        self.pages_front = Some(pages);
        self
    }

    pub fn pages_back(mut self, pages: usize) -> Self {
        self.pages_back = Some(pages);
        self
    }

    /// Replaces the accepted extensions. `dart` and `.dart` are equivalent.
    pub fn include_extensions(mut self, exts: Vec<String>) -> Self {
        self.include_extensions = Some(exts);
        self
    }

    /// Replaces the exclusion substrings.
    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = Some(patterns);
        self
    }

    /// Overrides the weight of one category. Later calls win.
    pub fn priority_weight(mut self, category: Category, weight: u32) -> Self {
        self.weight_overrides.push((category, weight));
        self
    }

    /// Replaces the built-in classification rules.
    pub fn rules(mut self, rules: Vec<RuleSpec>) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn top_files(mut self, top: usize) -> Self {
        self.top_files = Some(top);
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }

    /// Validates the options and builds the final `Config`.
    ///
    /// # Errors
    /// Returns `Error::Config` for out-of-range values, an empty extension
    /// list, or an invalid rule pattern.
    pub fn build(self) -> Result<Config> {
        validate_builder_options(&self)?;

        let include_extensions = normalize_extensions(self.include_extensions.unwrap_or_else(|| {
            to_strings(constants::DEFAULT_INCLUDE_EXTENSIONS)
        }));
        let exclude_patterns = normalize_patterns(
            self.exclude_patterns
                .unwrap_or_else(|| to_strings(constants::DEFAULT_EXCLUDE_PATTERNS)),
        );
        let rules = compile_rules(self.rules)?;

        let mut weights = PriorityWeights::default();
        for (category, weight) in self.weight_overrides {
            weights.set(category, weight);
        }

        let report_file = if self.no_report.unwrap_or(false) {
            None
        } else {
            Some(
                self.report_file
                    .unwrap_or_else(|| constants::DEFAULT_REPORT_FILE.to_string()),
            )
        };

        let output_file = self
            .output_file
            .unwrap_or_else(|| constants::DEFAULT_OUTPUT_FILE.to_string());
        ensure_distinct_outputs(&output_file, report_file.as_deref())?;

        Ok(Config {
            source_dir: PathBuf::from(
                self.source_dir
                    .unwrap_or_else(|| constants::DEFAULT_SOURCE_DIR.to_string()),
            ),
            output_dir: PathBuf::from(
                self.output_dir
                    .unwrap_or_else(|| constants::DEFAULT_OUTPUT_DIR.to_string()),
            ),
            output_file,
            report_file,
            project_name: self
                .project_name
                .unwrap_or_else(|| constants::DEFAULT_PROJECT_NAME.to_string()),
            encoding: self.encoding.unwrap_or_default(),
            selection: SelectionConfig {
                include_extensions,
                exclude_patterns,
                rules,
                weights,
            },
            pagination: PaginationConfig {
                lines_per_page: self
                    .lines_per_page
                    .unwrap_or(constants::DEFAULT_LINES_PER_PAGE),
                pages_front: self.pages_front.unwrap_or(constants::DEFAULT_PAGES_FRONT),
                pages_back: self.pages_back.unwrap_or(constants::DEFAULT_PAGES_BACK),
            },
            top_files: self.top_files.unwrap_or(constants::DEFAULT_TOP_FILES),
            dry_run: self.dry_run.unwrap_or(false),
        })
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
