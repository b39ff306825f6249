// src/output/dry_run.rs

use crate::core_types::ClassifiedFile;
use log::debug;
use std::io::{self, Write};

/// Formats one line of a ranked listing: `3. [CORE] core/models/user.dart (42 lines)`.
///
/// `rank` is 1-based.
pub fn format_ranked_entry(rank: usize, file: &ClassifiedFile) -> String {
    format!(
        "{}. [{}] {} ({} lines)",
        rank,
        file.category,
        file.relative_path(),
        file.line_count
    )
}

/// Writes the output for a dry run (-D).
///
/// Lists every eligible file in ranked order, without re-sorting. Nothing is
/// extracted or saved.
pub fn write_dry_run_output(writer: &mut dyn Write, files: &[ClassifiedFile]) -> io::Result<()> {
    debug!("Executing dry run output...");
    writeln!(
        writer,
        "\n--- Dry Run: {} files in ranked order ---",
        files.len()
    )?;
    for (index, file) in files.iter().enumerate() {
        writeln!(writer, "{}", format_ranked_entry(index + 1, file))?;
    }
    writeln!(writer, "--- End Dry Run ---")?;
    writer.flush()
}
