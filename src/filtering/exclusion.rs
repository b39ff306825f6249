// src/filtering/exclusion.rs

/// Returns the first exclusion pattern found anywhere in `relative_path`.
///
/// Patterns are literal substrings, not globs, so `test/` also matches
/// `integration_test/foo.dart`.
///
/// # Examples
///
/// ```
/// use exhibit::filtering::matching_exclusion;
///
/// let patterns = vec![".g.dart".to_string(), "test/".to_string()];
/// assert_eq!(matching_exclusion("models/user.g.dart", &patterns), Some(".g.dart"));
/// assert_eq!(matching_exclusion("models/user.dart", &patterns), None);
/// ```
pub fn matching_exclusion<'a>(relative_path: &str, patterns: &'a [String]) -> Option<&'a str> {
    patterns
        .iter()
        .map(String::as_str)
        .find(|pattern| !pattern.is_empty() && relative_path.contains(pattern))
}
