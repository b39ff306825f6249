// src/config/builder_logic.rs

use super::builder::{ConfigBuilder, RuleSpec};
use crate::classify::{default_rules, ClassificationRule};
use crate::constants;
use crate::errors::{ConfigError, Result};
use regex::Regex;

/// Validates the option values on the `ConfigBuilder`.
pub(super) fn validate_builder_options(builder: &ConfigBuilder) -> Result<()> {
    if builder.lines_per_page == Some(0) {
        return Err(invalid("lines_per_page", "must be 1 or greater"));
    }
    if builder.pages_front == Some(0) {
        return Err(invalid("pages_front", "must be 1 or greater"));
    }
    if let Some(exts) = &builder.include_extensions {
        if exts.iter().all(|e| e.trim().is_empty()) {
            return Err(invalid(
                "include_extensions",
                "at least one extension is required",
            ));
        }
    }
    if builder
        .output_file
        .as_deref()
        .is_some_and(|name| name.trim().is_empty())
    {
        return Err(invalid("output_file", "must not be empty"));
    }
    if builder.no_report != Some(true)
        && builder
            .report_file
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
    {
        return Err(invalid("report_file", "must not be empty"));
    }
    validate_page_budget(builder)?;
    Ok(())
}

/// Rejects page counts whose line budgets do not fit in a `usize`.
fn validate_page_budget(builder: &ConfigBuilder) -> Result<()> {
    let lines_per_page = builder
        .lines_per_page
        .unwrap_or(constants::DEFAULT_LINES_PER_PAGE);
    let pages_front = builder.pages_front.unwrap_or(constants::DEFAULT_PAGES_FRONT);
    let pages_back = builder.pages_back.unwrap_or(constants::DEFAULT_PAGES_BACK);
    let front = lines_per_page.checked_mul(pages_front);
    let back = lines_per_page.checked_mul(pages_back);
    match (front, back) {
        (Some(front), Some(back)) if front.checked_add(back).is_some() => Ok(()),
        _ => Err(invalid(
            "lines_per_page",
            "page budget is too large (lines_per_page * pages overflows)",
        )),
    }
}

/// Checks the resolved file names so the report can never replace the document.
pub(super) fn ensure_distinct_outputs(output_file: &str, report_file: Option<&str>) -> Result<()> {
    if report_file == Some(output_file) {
        return Err(invalid("report_file", "must differ from output_file"));
    }
    Ok(())
}

/// Compiles user-supplied rules, or returns the built-in rule set when none were given.
pub(super) fn compile_rules(specs: Option<Vec<RuleSpec>>) -> Result<Vec<ClassificationRule>> {
    let Some(specs) = specs else {
        return Ok(default_rules().to_vec());
    };
    specs
        .into_iter()
        .map(|spec| {
            let pattern = Regex::new(&spec.pattern).map_err(|source| ConfigError::InvalidRule {
                pattern: spec.pattern.clone(),
                source,
            })?;
            Ok(ClassificationRule::new(spec.category, pattern))
        })
        .collect()
}

fn invalid(option: &str, reason: &str) -> crate::errors::Error {
    ConfigError::InvalidValue {
        option: option.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
