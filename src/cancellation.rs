//! Provides a token-based mechanism for graceful cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A token that signals cancellation to the pipeline stages.
///
/// This struct is a cloneable, thread-safe wrapper around an `Arc<AtomicBool>`.
/// The scanner checks it per directory entry, the classifier and extractor
/// before and after their parallel reads, and each stage fails with
/// `Error::Interrupted` once it is set.
///
/// # Examples
///
/// ```
/// use exhibit::cancellation::CancellationToken;
/// use std::thread;
/// use std::time::Duration;
///
/// let token = CancellationToken::new();
/// let token_clone = token.clone();
///
/// let handle = thread::spawn(move || {
///     let mut files_read = 0;
///     while !token_clone.is_cancelled() {
///         files_read += 1;
///         thread::sleep(Duration::from_millis(10));
///     }
///     files_read
/// });
///
/// thread::sleep(Duration::from_millis(50));
///
/// // Signal cancellation from another thread
/// token.cancel();
///
/// let files_read = handle.join().unwrap();
/// println!("Stopped after {} iterations", files_read);
/// ```
#[derive(Debug, Clone)]
pub struct CancellationToken {
    inner: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a new `CancellationToken` in a non-cancelled state.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Signals cancellation to this token and all of its clones.
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::SeqCst);
    }

    /// Returns `true` once `cancel()` has been called on this token or any clone.
    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }
}

/// Equivalent to `CancellationToken::new()`.
///
/// # Examples
///
/// ```
/// use exhibit::cancellation::CancellationToken;
///
/// let token: CancellationToken = Default::default();
/// assert!(!token.is_cancelled());
/// ```
impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
