//! Orders classified files by importance.

use crate::core_types::ClassifiedFile;
use std::cmp::Ordering;

/// Compares two files for ranking: higher priority first, then more lines
/// first, then relative path in ascending byte order.
///
/// The final tie-break makes this a total order over distinct paths, so the
/// ranking never depends on the order the files were discovered in.
pub fn compare_rank(a: &ClassifiedFile, b: &ClassifiedFile) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| b.line_count.cmp(&a.line_count))
        .then_with(|| a.relative_path().cmp(b.relative_path()))
}

/// Sorts files into ranked order.
///
/// # Examples
///
/// ```
/// use exhibit::core_types::{Category, ClassifiedFile, FileRecord};
/// use exhibit::ranking::rank_files;
/// use std::path::PathBuf;
///
/// let file = |path: &str, priority: u32, line_count: usize| ClassifiedFile {
///     record: FileRecord {
///         relative_path: path.to_string(),
///         absolute_path: PathBuf::from(path),
///     },
///     category: Category::Ui,
///     priority,
///     line_count,
/// };
///
/// let ranked = rank_files(vec![file("b.dart", 4, 10), file("a.dart", 8, 1)]);
/// assert_eq!(ranked[0].relative_path(), "a.dart");
/// ```
pub fn rank_files(mut files: Vec<ClassifiedFile>) -> Vec<ClassifiedFile> {
    files.sort_by(compare_rank);
    files
}
