// src/constants.rs

/// Directory scanned when none is given.
pub const DEFAULT_SOURCE_DIR: &str = "lib";

/// Directory the document and report are written into.
pub const DEFAULT_OUTPUT_DIR: &str = "soft_copyright_temp";

/// File name of the generated document.
pub const DEFAULT_OUTPUT_FILE: &str = "source_code_copyright.txt";

/// File name of the human-readable extraction report.
pub const DEFAULT_REPORT_FILE: &str = "extraction_report.txt";

pub const DEFAULT_PROJECT_NAME: &str = "Untitled Project";

/// Registration offices require at least 50 lines per page.
pub const DEFAULT_LINES_PER_PAGE: usize = 50;
pub const DEFAULT_PAGES_FRONT: usize = 30;
pub const DEFAULT_PAGES_BACK: usize = 30;

/// Number of highest-ranked files listed in logs and the report.
pub const DEFAULT_TOP_FILES: usize = 10;

pub const DEFAULT_INCLUDE_EXTENSIONS: &[&str] = &[".dart"];

/// Generated sources and tests are never representative code.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[".g.dart", ".freezed.dart", "_test.dart", "test/"];

// --- Provenance header ---

/// Width of the `=` run in each file's provenance header.
pub const FILE_HEADER_SEPARATOR_WIDTH: usize = 60;
pub const FILE_HEADER_COMMENT_PREFIX: &str = "// ";
pub const FILE_HEADER_LABEL: &str = "File";

/// Separator between file blocks in the merged stream (one blank line).
pub const BLOCK_SEPARATOR: &str = "\n\n";

// --- Document layout ---

/// Width of the title rule and section banners.
pub const DOCUMENT_RULE_WIDTH: usize = 80;
pub const DOCUMENT_LABEL: &str = "Program Identification Material";
pub const DOCUMENT_SUBTITLE: &str = "Software Copyright Registration Application";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
