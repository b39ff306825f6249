// src/filtering/mod.rs

//! Decides which scanned files are eligible for extraction.
//!
//! A file passes when its relative path ends with an accepted extension and
//! contains none of the exclusion patterns. Exclusion always wins. The
//! relative order of passing files is preserved.

use crate::config::SelectionConfig;
use crate::core_types::FileRecord;
use log::debug;

mod exclusion;
mod extension;

pub use exclusion::matching_exclusion;
pub use extension::has_accepted_extension;

/// Checks a single relative path against the selection settings.
///
/// # Examples
///
/// ```
/// use exhibit::config::Config;
/// use exhibit::filtering::passes_filters;
///
/// let config = Config::new_for_test();
/// assert!(passes_filters("models/user.dart", &config.selection));
/// assert!(!passes_filters("models/user.g.dart", &config.selection));
/// assert!(!passes_filters("README.md", &config.selection));
/// ```
pub fn passes_filters(relative_path: &str, selection: &SelectionConfig) -> bool {
    if let Some(pattern) = matching_exclusion(relative_path, &selection.exclude_patterns) {
        debug!("Excluding {} (matches '{}')", relative_path, pattern);
        return false;
    }
    has_accepted_extension(relative_path, &selection.include_extensions)
}

/// Keeps the files that pass `passes_filters`, in their original order.
pub fn filter_files(files: Vec<FileRecord>, selection: &SelectionConfig) -> Vec<FileRecord> {
    files
        .into_iter()
        .filter(|file| passes_filters(&file.relative_path, selection))
        .collect()
}
