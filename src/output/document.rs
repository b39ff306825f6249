// src/output/document.rs

use crate::constants::DOCUMENT_RULE_WIDTH;
use crate::core_types::Document;
use crate::output::header::format_title_block;

/// Renders the document as text: the title block, the front section and,
/// only when the back window is non-empty, the back section.
///
/// Each section starts with a banner naming its pages and the 1-based line
/// range of the merged stream it covers.
pub fn render_document(document: &Document) -> String {
    let banner_rule = "/".repeat(DOCUMENT_RULE_WIDTH);
    let layout = &document.layout;
    let mut parts = vec![format_title_block(document)];

    parts.push(
        [
            String::new(),
            banner_rule.clone(),
            format!(
                "Front {} pages (lines 1 - {})",
                layout.pages_front,
                document.front_end_line()
            ),
            banner_rule.clone(),
            String::new(),
            document.front_window.join("\n"),
        ]
        .join("\n"),
    );

    if let Some(start) = document.back_start_line() {
        parts.push(
            [
                String::new(),
                String::new(),
                banner_rule.clone(),
                format!(
                    "Back {} pages (lines {} - {})",
                    layout.pages_back, start, document.total_source_lines
                ),
                banner_rule,
                String::new(),
                document.back_window.join("\n"),
            ]
            .join("\n"),
        );
    }

    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaginationConfig;
    use chrono::NaiveDate;

    fn document(front: &[&str], back: &[&str], total: usize, layout: PaginationConfig) -> Document {
        Document {
            front_window: front.iter().map(|s| s.to_string()).collect(),
            back_window: back.iter().map(|s| s.to_string()).collect(),
            total_source_lines: total,
            layout,
            project_name: "P".to_string(),
            generated_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_whole_stream_has_front_section_only() {
        let doc = document(&["x", "y", "z"], &[], 3, PaginationConfig::default());
        let text = render_document(&doc);
        assert!(text.contains("Front 30 pages (lines 1 - 3)"));
        assert!(!text.contains("Back "));
        assert!(text.ends_with("\n\nx\ny\nz"));
    }

    #[test]
    fn test_windowed_stream_has_both_sections() {
        let layout = PaginationConfig {
            lines_per_page: 2,
            pages_front: 1,
            pages_back: 1,
        };
        let doc = document(&["1", "2"], &["9", "10"], 10, layout);
        let text = render_document(&doc);
        let rule = "/".repeat(80);
        let expected_tail = format!(
            "\n{rule}\nFront 1 pages (lines 1 - 2)\n{rule}\n\n1\n2\n\n\n\
             {rule}\nBack 1 pages (lines 9 - 10)\n{rule}\n\n9\n10"
        );
        assert!(text.ends_with(&expected_tail), "got:\n{}", text);
        assert!(text.contains("Total included lines: 4"));
    }

    #[test]
    fn test_front_only_truncation_reports_front_budget() {
        let layout = PaginationConfig {
            lines_per_page: 2,
            pages_front: 1,
            pages_back: 0,
        };
        let doc = document(&["1", "2"], &[], 5, layout);
        let text = render_document(&doc);
        assert!(text.contains("Front 1 pages (lines 1 - 2)"));
        assert!(!text.contains("Back "));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let doc = document(&["a"], &[], 1, PaginationConfig::default());
        assert_eq!(render_document(&doc), render_document(&doc.clone()));
    }
}
