// src/config/path_resolve.rs

use crate::errors::{Error, Result};
use std::path::{Path, PathBuf};

/// Resolves the source directory to an absolute, canonicalized `PathBuf`.
///
/// # Errors
/// Returns `Error::SourceNotFound` if the path does not exist or is not a
/// directory. This is the one fatal precondition of a run.
pub fn resolve_source_dir(source_dir: &Path) -> Result<PathBuf> {
    if !source_dir.is_dir() {
        return Err(Error::SourceNotFound(source_dir.to_path_buf()));
    }
    source_dir
        .canonicalize()
        .map_err(|_| Error::SourceNotFound(source_dir.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_existing_dir() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let resolved = resolve_source_dir(temp.path())?;
        assert!(resolved.is_absolute());
        assert!(resolved.is_dir());
        Ok(())
    }

    #[test]
    fn test_resolve_file_is_not_a_source_dir() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("main.dart");
        fs::write(&file_path, "void main() {}")?;
        let result = resolve_source_dir(&file_path);
        assert!(matches!(result, Err(Error::SourceNotFound(p)) if p == file_path));
        Ok(())
    }

    #[test]
    fn test_resolve_non_existent_path() {
        let result = resolve_source_dir(Path::new("non_existent_path_for_testing_exhibit"));
        assert!(matches!(result, Err(Error::SourceNotFound(_))));
    }
}
