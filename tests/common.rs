// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // Used by most integration tests, but not all.
pub fn exhibit_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("exhibit"))
}

/// Writes `content` to `root/relative_path`, creating parent directories.
#[allow(dead_code)]
pub fn create_file(
    root: &Path,
    relative_path: &str,
    content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let file_path = root.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(())
}

/// `count` lines of the form `<prefix> <n>`, joined by newlines, no trailing newline.
#[allow(dead_code)]
pub fn numbered_lines(prefix: &str, count: usize) -> String {
    (1..=count)
        .map(|n| format!("{} {}", prefix, n))
        .collect::<Vec<_>>()
        .join("\n")
}
