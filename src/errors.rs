//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the fatal errors
//! that can stop a run, and `ConfigError`, which describes why a configuration
//! was rejected. Per-file failures during scanning and extraction are not
//! represented here as fatal; they are counted and logged by the stage that
//! produced them.

use std::path::PathBuf;
use thiserror::Error;

/// A `Result` alias using the crate's `Error` type.
pub type Result<T> = std::result::Result<T, Error>;

/// Application-specific errors used throughout `exhibit`.
#[derive(Error, Debug)]
pub enum Error {
    /// The source directory to scan does not exist (or is not a directory).
    /// This is the only precondition that stops the pipeline before any output is produced.
    #[error("Source directory does not exist: {}", .0.display())]
    SourceNotFound(PathBuf),

    // --- I/O Errors ---
    /// Error occurring during file or directory access (read, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// An output file or directory could not be written.
    #[error("Failed to write '{path}': {source}")]
    Write {
        /// The path that could not be written.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A file's content is not valid text in the configured encoding.
    #[error("File '{path}' is not valid {encoding}")]
    Encoding { path: String, encoding: String },

    // --- Configuration Errors ---
    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    // --- Signal Handling ---
    /// Error indicating that the operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,
}

/// Reasons a configuration can be rejected by `ConfigBuilder::build` or the
/// configuration file loader.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {option}: {reason}")]
    InvalidValue { option: String, reason: String },

    #[error("Invalid classification rule pattern '{pattern}': {source}")]
    InvalidRule {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown category '{0}' (expected one of ENTRY, CORE, FEATURE, UI)")]
    UnknownCategory(String),

    #[error("Failed to load configuration file '{path}': {reason}")]
    File { path: String, reason: String },
}

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Helper function to create an `Error::Write` with path context.
pub fn write_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Write {
        path: path.as_ref().display().to_string(),
        source,
    }
}
