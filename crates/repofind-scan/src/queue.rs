//! Hand-off queue between the scanning thread and the reporting context.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

/// Thread-safe FIFO of discovered repository paths.
///
/// The scanning thread pushes one path at a time; the reporting side drains
/// everything in one go. The lock is only held for the memory operations.
#[derive(Debug, Default)]
pub struct PathQueue {
    inner: Mutex<VecDeque<PathBuf>>,
}

impl PathQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(VecDeque::new()),
        }
    }

    /// Append a path.
    pub fn push(&self, path: PathBuf) {
        self.lock().push_back(path);
    }

    /// Remove and return every queued path, oldest first.
    pub fn drain(&self) -> Vec<PathBuf> {
        let drained = std::mem::take(&mut *self.lock());
        drained.into()
    }

    /// Number of queued paths.
    pub fn size(&self) -> usize {
        self.lock().len()
    }

    /// Check if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave a VecDeque half-written,
    // so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, VecDeque<PathBuf>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
