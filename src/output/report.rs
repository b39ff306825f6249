// src/output/report.rs

use crate::classify::category_counts;
use crate::config::Config;
use crate::constants::{DOCUMENT_RULE_WIDTH, TIMESTAMP_FORMAT};
use crate::output::dry_run::format_ranked_entry;
use crate::ExhibitResult;
use log::debug;

/// Renders the human-readable extraction report saved next to the document.
///
/// The report restates what the run did: file counts at each stage (with the
/// reason for every failed read), per-category counts, line totals and the
/// covered ranges, and the top `config.top_files` ranked files.
pub fn render_report(result: &ExhibitResult, config: &Config) -> String {
    debug!("Rendering extraction report...");
    let document = &result.document;
    let extraction = &result.extraction;
    let rule = "=".repeat(DOCUMENT_RULE_WIDTH);

    let mut lines = vec![
        rule.clone(),
        format!("{} - Extraction Report", document.project_name),
        rule,
        format!(
            "Generated at: {}",
            document.generated_at.format(TIMESTAMP_FORMAT)
        ),
        format!("Source directory: {}", config.source_dir.display()),
        format!("Document: {}", config.output_path().display()),
        String::new(),
        "Files".to_string(),
        format!("  Scanned:   {}", result.scanned_count),
        format!("  Eligible:  {}", result.files.len()),
        format!("  Excluded:  {}", result.excluded_count()),
        format!("  Extracted: {}", extraction.success_count),
        format!("  Failed:    {}", extraction.error_count),
    ];
    lines.extend(
        extraction
            .failures
            .iter()
            .map(|failure| format!("    - {}: {}", failure.file_path, failure.reason)),
    );

    lines.push(String::new());
    lines.push("Categories".to_string());
    lines.extend(
        category_counts(&result.files)
            .into_iter()
            .map(|(category, count)| format!("  {:<8} {}", category.as_str(), count)),
    );

    lines.push(String::new());
    lines.push("Lines".to_string());
    lines.push(format!(
        "  Total source lines:   {}",
        document.total_source_lines
    ));
    lines.push(format!("  Total included lines: {}", document.included_lines()));
    lines.push(format!("  Front: lines 1 - {}", document.front_end_line()));
    lines.push(match document.back_start_line() {
        Some(start) => format!("  Back:  lines {} - {}", start, document.total_source_lines),
        None => "  Back:  none".to_string(),
    });

    let top = config.top_files.min(result.files.len());
    lines.push(String::new());
    lines.push(format!("Top {} files", top));
    lines.extend(
        result
            .files
            .iter()
            .take(top)
            .enumerate()
            .map(|(index, file)| format!("  {}", format_ranked_entry(index + 1, file))),
    );

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaginationConfig;
    use crate::core_types::{
        Category, ClassifiedFile, Document, Extraction, ExtractionFailure, FileRecord,
    };
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn file(path: &str, category: Category, line_count: usize) -> ClassifiedFile {
        ClassifiedFile {
            record: FileRecord {
                relative_path: path.to_string(),
                absolute_path: PathBuf::from("/lib").join(path),
            },
            category,
            priority: 0,
            line_count,
        }
    }

    fn sample_result() -> ExhibitResult {
        let files = vec![
            file("main.dart", Category::Entry, 3),
            file("core/models/user.dart", Category::Core, 10),
            file("features/a/data/repo.dart", Category::Feature, 7),
        ];
        let extraction = Extraction {
            success_count: 2,
            error_count: 1,
            failures: vec![ExtractionFailure {
                file_path: "features/a/data/repo.dart".to_string(),
                reason: "permission denied".to_string(),
            }],
            total_lines: 20,
            ..Default::default()
        };
        let document = Document {
            front_window: vec![String::new(); 20],
            back_window: Vec::new(),
            total_source_lines: 20,
            layout: PaginationConfig::default(),
            project_name: "Orders".to_string(),
            generated_at: NaiveDate::from_ymd_opt(2024, 2, 3)
                .unwrap()
                .and_hms_opt(4, 5, 6)
                .unwrap(),
        };
        ExhibitResult {
            scanned_count: 5,
            files,
            extraction,
            document,
        }
    }

    #[test]
    fn test_report_contents() {
        let mut config = Config::new_for_test();
        config.top_files = 2;
        let report = render_report(&sample_result(), &config);

        assert!(report.contains("Orders - Extraction Report"));
        assert!(report.contains("Generated at: 2024-02-03 04:05:06"));
        assert!(report.contains("  Scanned:   5\n"));
        assert!(report.contains("  Eligible:  3\n"));
        assert!(report.contains("  Excluded:  2\n"));
        assert!(report.contains("  Failed:    1\n"));
        assert!(report.contains("    - features/a/data/repo.dart: permission denied"));
        assert!(report.contains("  UI       0\n"));
        assert!(report.contains("  Front: lines 1 - 20\n"));
        assert!(report.contains("  Back:  none\n"));
        assert!(report.contains("Top 2 files\n  1. [ENTRY] main.dart (3 lines)\n  2. [CORE]"));
        assert!(!report.contains("3. [FEATURE]"));
    }
}
