//! Assigns each eligible file a category, a priority weight and a line count.
//!
//! Categories come from an ordered list of path rules: the first rule whose
//! pattern matches the `/`-normalized relative path decides, and a path no rule
//! matches is `UI`. Classification therefore never fails. The priority weight
//! is looked up from the category; the line count follows the
//! split-on-newline convention of `processing::count_lines`.

use crate::cancellation::CancellationToken;
use crate::config::{Config, SelectionConfig};
use crate::core_types::{Category, ClassifiedFile, FileRecord};
use crate::errors::{Error, Result};
use crate::processing::{count_lines, read_text};
use log::{debug, warn};
use rayon::prelude::*;
use std::collections::BTreeMap;

mod rules;

pub use rules::{default_rules, ClassificationRule};

/// Returns the category of the first rule matching `relative_path`, or `UI`.
///
/// Backslashes are normalized to `/` before matching.
///
/// # Examples
///
/// ```
/// use exhibit::classify::{categorize, default_rules};
/// use exhibit::core_types::Category;
///
/// let rules = default_rules();
/// assert_eq!(categorize("main.dart", rules), Category::Entry);
/// assert_eq!(categorize("core/database/x.dart", rules), Category::Core);
/// assert_eq!(categorize("features/orders/domain/y.dart", rules), Category::Feature);
/// assert_eq!(categorize("random/other.dart", rules), Category::Ui);
/// ```
pub fn categorize(relative_path: &str, rules: &[ClassificationRule]) -> Category {
    let normalized = relative_path.replace('\\', "/");
    rules
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map(|rule| rule.category)
        .unwrap_or(Category::Ui)
}

/// Classifies a single file. Reads the file to count its lines; an unreadable
/// file is logged and counted as 0 lines.
pub fn classify_file(record: FileRecord, config: &Config) -> ClassifiedFile {
    let selection: &SelectionConfig = &config.selection;
    let category = categorize(&record.relative_path, &selection.rules);
    let priority = selection.weights.weight(category);
    let line_count = match read_text(&record.absolute_path, config.encoding) {
        Ok(content) => count_lines(&content),
        Err(e) => {
            warn!("Could not count lines of {}: {}", record.relative_path, e);
            0
        }
    };
    debug!(
        "Classified {} as {} (priority {}, {} lines)",
        record.relative_path, category, priority, line_count
    );
    ClassifiedFile {
        record,
        category,
        priority,
        line_count,
    }
}

/// Classifies every file. Line counting runs in parallel; the output keeps the
/// input order.
///
/// # Errors
/// Returns `Error::Interrupted` if the token is cancelled.
pub fn classify_files(
    files: Vec<FileRecord>,
    config: &Config,
    token: &CancellationToken,
) -> Result<Vec<ClassifiedFile>> {
    if token.is_cancelled() {
        return Err(Error::Interrupted);
    }
    let classified: Vec<ClassifiedFile> = files
        .into_par_iter()
        .map(|record| classify_file(record, config))
        .collect();
    if token.is_cancelled() {
        return Err(Error::Interrupted);
    }
    Ok(classified)
}

/// Counts files per category, with every category present (possibly 0).
pub fn category_counts(files: &[ClassifiedFile]) -> BTreeMap<Category, usize> {
    let mut counts: BTreeMap<Category, usize> = Category::ALL.iter().map(|c| (*c, 0)).collect();
    for file in files {
        *counts.entry(file.category).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::FileRecord;
    use once_cell::sync::Lazy;
    use regex::Regex;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    static CUSTOM_RULES: Lazy<Vec<ClassificationRule>> = Lazy::new(|| {
        vec![
            ClassificationRule::new(Category::Feature, Regex::new("^shared/").unwrap()),
            ClassificationRule::new(Category::Core, Regex::new("^shared/db/").unwrap()),
        ]
    });

    #[test]
    fn test_category_scenario() {
        let rules = default_rules();
        let cases = [
            ("main.dart", Category::Entry),
            ("core/database/x.dart", Category::Core),
            ("features/orders/domain/y.dart", Category::Feature),
            ("features/orders/presentation/screens/z.dart", Category::Ui),
            ("random/other.dart", Category::Ui),
        ];
        for (path, expected) in cases {
            assert_eq!(categorize(path, rules), expected, "path: {}", path);
        }
    }

    #[test]
    fn test_windows_separators_are_normalized() {
        assert_eq!(
            categorize("core\\services\\api.dart", default_rules()),
            Category::Core
        );
    }

    #[test]
    fn test_feature_rule_checked_before_ui_rule() {
        // Matches both the business-logic and presentation shapes; FEATURE comes first.
        let path = "features/a/presentation/widgets/data/x.dart";
        assert_eq!(categorize(path, default_rules()), Category::Feature);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        assert_eq!(categorize("shared/db/x.dart", &CUSTOM_RULES), Category::Feature);
    }

    #[test]
    fn test_no_rules_defaults_to_ui() {
        assert_eq!(categorize("main.dart", &[]), Category::Ui);
    }

    #[test]
    fn test_classify_file_counts_lines_and_weights() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("main.dart");
        // Two text lines plus a trailing newline: three segments.
        fs::write(&path, "void main() {\n}\n")?;
        let record = FileRecord {
            relative_path: "main.dart".to_string(),
            absolute_path: path,
        };
        let config = Config::new_for_test();

        let classified = classify_file(record, &config);
        assert_eq!(classified.category, Category::Entry);
        assert_eq!(classified.priority, 10);
        assert_eq!(classified.line_count, 3);
        Ok(())
    }

    #[test]
    fn test_unreadable_file_counts_zero_lines() {
        let record = FileRecord {
            relative_path: "core/models/gone.dart".to_string(),
            absolute_path: PathBuf::from("/definitely/not/here/gone.dart"),
        };
        let classified = classify_file(record, &Config::new_for_test());
        assert_eq!(classified.category, Category::Core);
        assert_eq!(classified.line_count, 0);
    }

    #[test]
    fn test_classify_files_preserves_order() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let names = ["b.dart", "a.dart", "main.dart", "c.dart"];
        let records: Vec<FileRecord> = names
            .iter()
            .map(|name| {
                let path = dir.path().join(name);
                fs::write(&path, "x").unwrap();
                FileRecord {
                    relative_path: name.to_string(),
                    absolute_path: path,
                }
            })
            .collect();

        let classified =
            classify_files(records, &Config::new_for_test(), &CancellationToken::new())?;
        let paths: Vec<&str> = classified.iter().map(|f| f.relative_path()).collect();
        assert_eq!(paths, names);
        Ok(())
    }

    #[test]
    fn test_classify_files_respects_cancellation() {
        let token = CancellationToken::new();
        token.cancel();
        let result = classify_files(Vec::new(), &Config::new_for_test(), &token);
        assert!(matches!(result, Err(Error::Interrupted)));
    }

    #[test]
    fn test_category_counts_include_empty_categories() {
        let file = ClassifiedFile {
            record: FileRecord {
                relative_path: "main.dart".to_string(),
                absolute_path: PathBuf::from("/p/main.dart"),
            },
            category: Category::Entry,
            priority: 10,
            line_count: 1,
        };
        let counts = category_counts(&[file.clone(), file]);
        assert_eq!(counts[&Category::Entry], 2);
        assert_eq!(counts[&Category::Core], 0);
        assert_eq!(counts.len(), 4);
    }
}
