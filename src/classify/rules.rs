// src/classify/rules.rs

use crate::core_types::Category;
use once_cell::sync::Lazy;
use regex::Regex;

/// A path pattern mapped to the category it assigns.
#[derive(Debug, Clone)]
pub struct ClassificationRule {
    pub category: Category,
    pub pattern: Regex,
}

impl ClassificationRule {
    pub fn new(category: Category, pattern: Regex) -> Self {
        Self { category, pattern }
    }

    /// Checks the rule against a `/`-separated relative path.
    #[inline]
    pub fn matches(&self, normalized_path: &str) -> bool {
        self.pattern.is_match(normalized_path)
    }
}

static DEFAULT_RULES: Lazy<Vec<ClassificationRule>> = Lazy::new(|| {
    [
        // Single top-level program entry file.
        (Category::Entry, r"^(main\.dart|app\.dart|main_.*\.dart)$"),
        (Category::Core, r"^core/(database|services|router|models)/"),
        (Category::Feature, r"^features/.*/(domain|application|data)/"),
        (Category::Ui, r"^features/.*/presentation/(screens|widgets)/"),
    ]
    .into_iter()
    .map(|(category, source)| ClassificationRule::new(category, Regex::new(source).unwrap()))
    .collect()
});

/// The built-in rule set, in check order: ENTRY, CORE, FEATURE, UI.
pub fn default_rules() -> &'static [ClassificationRule] {
    &DEFAULT_RULES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_rule_matches_only_top_level() {
        let entry = &default_rules()[0];
        assert!(entry.matches("main.dart"));
        assert!(entry.matches("app.dart"));
        assert!(entry.matches("main_dev.dart"));
        assert!(!entry.matches("src/main.dart"));
        assert!(!entry.matches("main.dart.bak"));
    }

    #[test]
    fn test_core_rule_requires_named_subdirectory() {
        let core = &default_rules()[1];
        assert!(core.matches("core/router/app_router.dart"));
        assert!(!core.matches("core/utils/strings.dart"));
        assert!(!core.matches("lib/core/database/db.dart"));
    }
}
