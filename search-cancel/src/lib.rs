//! Version based cancellation shared by every lookup of a path search.
//!
//! Starting a search registers a new version. Any token created for an older
//! version observes cancellation from then on, so a superseded search stops
//! between alternatives (or between scan chunks) without any locking.

use std::sync::atomic::{AtomicU64, Ordering};

/// Latest search version that is allowed to keep running.
pub static ACTIVE_SEARCH_VERSION: AtomicU64 = AtomicU64::new(0);

/// Number of scanned records between two cancellation checks.
pub const CANCEL_CHECK_INTERVAL: usize = 0x4000;

#[derive(Clone, Copy, Debug)]
pub struct CancellationToken {
    version: Option<u64>,
}

impl CancellationToken {
    /// Registers `version` as the active search and returns its token.
    pub fn new(version: u64) -> Self {
        ACTIVE_SEARCH_VERSION.fetch_max(version, Ordering::SeqCst);
        Self {
            version: Some(version),
        }
    }

    /// A token that never cancels. Used by tests and one-shot callers.
    pub fn noop() -> Self {
        Self { version: None }
    }

    pub fn is_cancelled(&self) -> bool {
        match self.version {
            Some(version) => ACTIVE_SEARCH_VERSION.load(Ordering::SeqCst) != version,
            None => false,
        }
    }
}
