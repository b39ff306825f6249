// src/config/parsing.rs

use crate::core_types::Category;

/// A single `CATEGORY=WEIGHT` override given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightOverride {
    pub category: Category,
    pub weight: u32,
}

/// Parses a `CATEGORY=WEIGHT` argument (e.g. `CORE=9`).
///
/// Used as a clap `value_parser`, so errors are plain strings.
pub fn parse_weight_override(arg: &str) -> Result<WeightOverride, String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=WEIGHT, got '{}'", arg))?;
    let category = name.parse::<Category>().map_err(|e| e.to_string())?;
    let weight = value
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid weight '{}': {}", value.trim(), e))?;
    Ok(WeightOverride { category, weight })
}

/// Normalizes accepted extensions to dot-prefixed suffixes, dropping blanks.
///
/// Matching stays case-sensitive, so the case of each entry is preserved.
pub(super) fn normalize_extensions(exts: Vec<String>) -> Vec<String> {
    exts.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(|s| if s.starts_with('.') { s } else { format!(".{}", s) })
        .collect()
}

/// Drops blank exclusion patterns; an empty substring would exclude every file.
pub(super) fn normalize_patterns(patterns: Vec<String>) -> Vec<String> {
    patterns.into_iter().filter(|p| !p.is_empty()).collect()
}
