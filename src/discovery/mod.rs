//! Scans the source directory for regular files.
use crate::cancellation::CancellationToken;
use crate::config::resolve_source_dir;
use crate::core_types::FileRecord;
use crate::errors::{Error, Result};
use log::debug;
use std::path::Path;

mod entry_processor;
mod walker;

use entry_processor::process_direntry;
use walker::build_walker;

/// Recursively lists every regular file under `root`.
///
/// Each record carries the path relative to `root` (separators normalized to
/// `/`) and the absolute path used for reading. No content is read here.
/// Files are returned in a stable file-name order; downstream stages do not
/// depend on it, since ranking imposes the final order.
///
/// Unreadable subdirectories are logged and skipped.
///
/// # Errors
/// Returns `Error::SourceNotFound` if `root` is not an existing directory, or
/// `Error::Interrupted` if the token is cancelled during the walk.
///
/// # Examples
///
/// ```
/// use exhibit::cancellation::CancellationToken;
/// use exhibit::discovery::scan_directory;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dir = tempfile::tempdir()?;
/// std::fs::create_dir(dir.path().join("core"))?;
/// std::fs::write(dir.path().join("core/db.dart"), "class Db {}")?;
///
/// let files = scan_directory(dir.path(), &CancellationToken::new())?;
/// assert_eq!(files.len(), 1);
/// assert_eq!(files[0].relative_path, "core/db.dart");
/// # Ok(())
/// # }
/// ```
pub fn scan_directory(root: &Path, token: &CancellationToken) -> Result<Vec<FileRecord>> {
    if token.is_cancelled() {
        return Err(Error::Interrupted);
    }
    let root = resolve_source_dir(root)?;

    let mut files = Vec::new();
    for entry_result in build_walker(&root) {
        if token.is_cancelled() {
            return Err(Error::Interrupted);
        }
        if let Some(record) = process_direntry(entry_result, &root) {
            files.push(record);
        }
    }

    debug!("Scan complete. Found {} files under {}", files.len(), root.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_scan_is_recursive_and_includes_hidden() -> Result<()> {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("features/orders/domain")).unwrap();
        fs::create_dir_all(root.join(".hidden")).unwrap();
        fs::write(root.join("main.dart"), "void main() {}").unwrap();
        fs::write(root.join("features/orders/domain/order.dart"), "class Order {}").unwrap();
        fs::write(root.join(".hidden/secret.dart"), "x").unwrap();
        fs::write(root.join(".gitignore"), "*.dart\n").unwrap();

        let files = scan_directory(root, &CancellationToken::new())?;
        let mut paths: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
        paths.sort();
        assert_eq!(
            paths,
            [
                ".gitignore",
                ".hidden/secret.dart",
                "features/orders/domain/order.dart",
                "main.dart"
            ]
        );
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_does_not_stop_scan() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let root = dir.path();
        let locked = root.join("locked");
        fs::create_dir_all(&locked).unwrap();
        fs::write(locked.join("hidden.dart"), "x").unwrap();
        fs::write(root.join("a.dart"), "a").unwrap();
        fs::write(root.join("z.dart"), "z").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can still read the directory; nothing to check then.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return Ok(());
        }

        let result = scan_directory(root, &CancellationToken::new());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let files = result?;
        let paths: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(paths, ["a.dart", "z.dart"]);
        Ok(())
    }

    #[test]
    fn test_scan_empty_directory() -> Result<()> {
        let dir = tempdir().unwrap();
        assert!(scan_directory(dir.path(), &CancellationToken::new())?.is_empty());
        Ok(())
    }

    #[test]
    fn test_scan_missing_root() {
        let result = scan_directory(
            Path::new("definitely_missing_exhibit_source"),
            &CancellationToken::new(),
        );
        assert!(matches!(result, Err(Error::SourceNotFound(_))));
    }

    #[test]
    fn test_scan_cancelled() {
        let dir = tempdir().unwrap();
        let token = CancellationToken::new();
        token.cancel();
        assert!(matches!(
            scan_directory(dir.path(), &token),
            Err(Error::Interrupted)
        ));
    }
}
