//! Single-slot credentials memoization
//!
//! Each loader owns one slot. The slot starts unset, is filled at most once,
//! and is never invalidated; a loader that failed to resolve leaves it unset
//! so the next call re-runs the resolution chain.

use crate::types::Credentials;
use tokio::sync::OnceCell;

/// Write-once cache slot for a resolved credentials value
#[derive(Debug, Default)]
pub struct ConfigSlot {
    inner: OnceCell<Credentials>,
}

impl ConfigSlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self {
            inner: OnceCell::new(),
        }
    }

    /// Get the cached credentials, if resolved
    pub fn get(&self) -> Option<&Credentials> {
        self.inner.get()
    }

    /// Whether a resolution has completed
    pub fn is_resolved(&self) -> bool {
        self.inner.initialized()
    }

    /// Store the resolved credentials.
    ///
    /// Overlapping resolutions may both reach this point; the data is
    /// identical regardless of which call wins, so the losing store is
    /// silently dropped.
    pub fn store(&self, credentials: Credentials) {
        let _ = self.inner.set(credentials);
    }
}
