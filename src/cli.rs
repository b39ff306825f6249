// src/cli.rs

use crate::config::{parse_weight_override, TextEncoding, WeightOverride};
use clap::Parser;

/// Builds a source code exhibit for software copyright registration.
///
/// exhibit scans a source tree, keeps the files with accepted extensions,
/// ranks them by architectural importance (entry points, core infrastructure,
/// feature logic, presentation), concatenates them with a provenance header per
/// file, and keeps the first and last pages of the result as a single text
/// document. Short projects are included whole.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Source directory to scan [default: lib].
    #[arg(value_name = "SOURCE_DIR")]
    pub source_dir: Option<String>,

    /// Load options from a TOML configuration file. Command-line flags take precedence.
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<String>,

    // --- Output Options ---
    /// Directory the document and report are written into (created if missing) [default: soft_copyright_temp].
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// File name of the generated document [default: source_code_copyright.txt].
    #[arg(long, value_name = "NAME")]
    pub output_file: Option<String>,

    /// File name of the extraction report [default: extraction_report.txt].
    #[arg(long, value_name = "NAME")]
    pub report_file: Option<String>,

    /// Do not write the extraction report.
    #[arg(long, action = clap::ArgAction::SetTrue, conflicts_with = "report_file")]
    pub no_report: bool,

    /// Project name shown in the document title [default: Untitled Project].
    #[arg(short = 'p', long, value_name = "NAME")]
    pub project_name: Option<String>,

    /// Text encoding used to read source files [default: utf8-lossy].
    #[arg(long, value_enum, value_name = "ENCODING")]
    pub encoding: Option<TextEncoding>,

    // --- Page Budget ---
    /// Lines per page [default: 50].
    #[arg(long, value_name = "N")]
    pub lines_per_page: Option<usize>,

    /// Pages taken from the start of the merged source [default: 30].
    #[arg(long, value_name = "N")]
    pub pages_front: Option<usize>,

    /// Pages taken from the end of the merged source [default: 30].
    #[arg(long, value_name = "N")]
    pub pages_back: Option<usize>,

    // --- Selection Options ---
    /// Accept only files ending with these extensions (case-sensitive, repeatable) [default: .dart].
    #[arg(short = 'e', long = "ext", value_name = "EXT", num_args = 1..)]
    pub extensions: Option<Vec<String>>,

    /// Skip files whose relative path contains any of these substrings (repeatable).
    /// Replaces the default list (.g.dart, .freezed.dart, _test.dart, test/).
    #[arg(short = 'x', long = "exclude", value_name = "PATTERN", num_args = 1..)]
    pub exclude_patterns: Option<Vec<String>>,

    /// Override a category's priority weight, e.g. `-w CORE=9` (repeatable).
    #[arg(short = 'w', long = "weight", value_name = "CATEGORY=N", value_parser = parse_weight_override)]
    pub weights: Vec<WeightOverride>,

    /// Number of top-ranked files listed in the log and the report [default: 10].
    #[arg(long = "top", value_name = "N")]
    pub top_files: Option<usize>,

    // --- Execution Control ---
    /// Print the ranked file list without extracting or writing anything.
    #[arg(short = 'D', long, action = clap::ArgAction::SetTrue)]
    pub dry_run: bool,
}
