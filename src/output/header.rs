// src/output/header.rs

use crate::constants::{DOCUMENT_LABEL, DOCUMENT_RULE_WIDTH, DOCUMENT_SUBTITLE, TIMESTAMP_FORMAT};
use crate::core_types::Document;

/// Builds the title block at the top of the document.
///
/// The block is fully determined by the document, including its timestamp,
/// so identical inputs always produce identical text. It ends with an empty
/// line after the closing rule.
pub(crate) fn format_title_block(document: &Document) -> String {
    let rule = "=".repeat(DOCUMENT_RULE_WIDTH);
    [
        rule.clone(),
        format!("{} - {}", document.project_name, DOCUMENT_LABEL),
        DOCUMENT_SUBTITLE.to_string(),
        rule.clone(),
        String::new(),
        format!(
            "Generated at: {}",
            document.generated_at.format(TIMESTAMP_FORMAT)
        ),
        format!("Total source lines: {}", document.total_source_lines),
        format!("Total included lines: {}", document.included_lines()),
        String::new(),
        rule,
        String::new(),
    ]
    .join("\n")
}
