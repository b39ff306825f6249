// src/config/file.rs

//! Loading of the optional TOML configuration file.
//!
//! ```toml
//! source_dir = "lib"
//! project_name = "Inventory Manager"
//! pages_front = 30
//! include_extensions = [".dart"]
//!
//! [priority_weights]
//! CORE = 9
//!
//! [[rules]]
//! category = "ENTRY"
//! pattern = '^main\.dart$'
//! ```

use crate::errors::{ConfigError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Raw contents of a configuration file. Every key is optional; missing keys
/// fall back to the defaults and may be overridden again by CLI flags.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub source_dir: Option<String>,
    pub output_dir: Option<String>,
    pub output_file: Option<String>,
    pub report_file: Option<String>,
    pub project_name: Option<String>,
    pub encoding: Option<String>,
    pub lines_per_page: Option<usize>,
    pub pages_front: Option<usize>,
    pub pages_back: Option<usize>,
    pub include_extensions: Option<Vec<String>>,
    pub exclude_patterns: Option<Vec<String>>,
    /// Category name to weight. Names are validated when the builder merges the file.
    pub priority_weights: Option<BTreeMap<String, u32>>,
    /// Replaces the built-in classification rules when present.
    pub rules: Option<Vec<RuleEntry>>,
    pub top_files: Option<usize>,
}

/// One `[[rules]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleEntry {
    pub category: String,
    pub pattern: String,
}

/// Reads and parses a configuration file.
///
/// # Errors
/// Returns `ConfigError::File` if the file cannot be read or is not valid TOML
/// for `ConfigFile`.
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::File {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let parsed = toml::from_str::<ConfigFile>(&text).map_err(|e| ConfigError::File {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    log::debug!("Loaded configuration file: {}", path.display());
    Ok(parsed)
}
