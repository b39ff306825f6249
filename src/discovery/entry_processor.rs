// src/discovery/entry_processor.rs

use crate::core_types::FileRecord;
use ignore::DirEntry;
use log::{trace, warn};
use std::path::{Component, Path};

/// Processes a single directory entry from the walk.
///
/// Returns `Some(FileRecord)` for regular files below `root`, and `None` for
/// directories, symbolic links, other special files, the root itself, and
/// entries the walker reported an error for. Errors are logged and skipped
/// so one unreadable subtree never ends the scan.
pub(crate) fn process_direntry(
    entry_result: Result<DirEntry, ignore::Error>,
    root: &Path,
) -> Option<FileRecord> {
    let entry = match entry_result {
        Ok(entry) => entry,
        Err(ignore_error) => {
            warn!("Walker error: {}", ignore_error);
            return None;
        }
    };

    if entry.depth() == 0 {
        return None;
    }
    let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
    if !is_file {
        trace!("Skipping non-file entry: {}", entry.path().display());
        return None;
    }

    let absolute_path = entry.into_path();
    let relative_path = match absolute_path.strip_prefix(root) {
        Ok(relative) => normalize_relative(relative),
        Err(err) => {
            warn!(
                "Failed to strip prefix '{}' from '{}': {}. Skipping.",
                root.display(),
                absolute_path.display(),
                err
            );
            return None;
        }
    };
    trace!("Discovered file: {}", relative_path);

    Some(FileRecord {
        relative_path,
        absolute_path,
    })
}

/// Joins path components with `/`, whatever the platform separator.
pub(crate) fn normalize_relative(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
