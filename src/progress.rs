// src/progress.rs

//! Defines a trait for reporting progress of the extraction stage.
#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

/// A trait for reporting progress, abstracting over specific implementations like `indicatif`.
///
/// The extractor sets the length to the number of ranked files, advances the
/// position once per file read, and finishes with a message.
///
/// # Examples
///
/// ```
/// use exhibit::progress::ProgressReporter;
/// use std::sync::atomic::{AtomicU64, Ordering};
///
/// // A reporter that only remembers how far it got.
/// struct Counter {
///     position: AtomicU64,
/// }
/// impl ProgressReporter for Counter {
///     fn set_length(&self, _len: u64) {}
///     fn set_position(&self, pos: u64) {
///         self.position.store(pos, Ordering::Relaxed);
///     }
///     fn set_message(&self, _msg: String) {}
///     fn finish(&self) {}
///     fn finish_with_message(&self, _msg: String) {}
/// }
///
/// let reporter = Counter { position: AtomicU64::new(0) };
/// reporter.set_position(3);
/// assert_eq!(reporter.position.load(Ordering::Relaxed), 3);
/// ```
pub trait ProgressReporter: Send + Sync {
    /// Sets the total number of items to process.
    fn set_length(&self, len: u64);
    /// Sets the current position in the process.
    fn set_position(&self, pos: u64);
    /// Sets a descriptive message for the current operation (e.g., "Extracting").
    fn set_message(&self, msg: String);
    /// Finishes the progress reporting, hiding the progress bar.
    fn finish(&self);
    /// Finishes the progress reporting with a final message.
    fn finish_with_message(&self, msg: String);
}

/// A `ProgressReporter` that does nothing.
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    fn set_length(&self, _len: u64) {}
    fn set_position(&self, _pos: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish(&self) {}
    fn finish_with_message(&self, _msg: String) {}
}

/// An implementation of `ProgressReporter` using the `indicatif` crate.
#[cfg(feature = "progress")]
#[derive(Clone)]
pub struct IndicatifProgress {
    bar: ProgressBar,
}

#[cfg(feature = "progress")]
impl IndicatifProgress {
    /// Creates a new progress bar drawn on stderr.
    pub fn new() -> Self {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Self { bar: pb }
    }
}

#[cfg(feature = "progress")]
impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl ProgressReporter for IndicatifProgress {
    fn set_length(&self, len: u64) {
        self.bar.set_length(len);
    }

    fn set_position(&self, pos: u64) {
        self.bar.set_position(pos);
    }

    fn set_message(&self, msg: String) {
        self.bar.set_message(msg);
    }

    fn finish(&self) {
        self.bar.finish();
    }

    fn finish_with_message(&self, msg: String) {
        self.bar.finish_with_message(msg);
    }
}
