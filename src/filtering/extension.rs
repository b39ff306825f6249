// src/filtering/extension.rs

/// Checks whether `relative_path` ends with one of the accepted extensions.
///
/// Extensions are plain suffixes (normally dot-prefixed, e.g. `.dart`), so a
/// compound suffix like `.g.dart` also ends with `.dart`. The comparison is
/// case-sensitive: `MAIN.DART` does not match `.dart`.
///
/// # Examples
///
/// ```
/// use exhibit::filtering::has_accepted_extension;
///
/// let exts = vec![".dart".to_string()];
/// assert!(has_accepted_extension("core/router/app_router.dart", &exts));
/// assert!(!has_accepted_extension("pubspec.yaml", &exts));
/// assert!(!has_accepted_extension("README.DART", &exts));
/// ```
pub fn has_accepted_extension(relative_path: &str, extensions: &[String]) -> bool {
    extensions
        .iter()
        .any(|ext| !ext.is_empty() && relative_path.ends_with(ext.as_str()))
}
