//! Stale-response protection for independent screen fetches.
//!
//! Each screen keeps one [`RequestGuard`]; every outgoing fetch takes a
//! token from [`RequestGuard::begin`], and the response handler applies
//! the result only when [`RequestGuard::accept`] still holds. A response
//! arriving after the user switched selection carries a superseded token
//! and is dropped instead of overwriting newer state.

use std::sync::atomic::{AtomicU64, Ordering};

/// Generation counter guarding a screen's in-flight fetches
#[derive(Debug, Default)]
pub struct RequestGuard {
    generation: AtomicU64,
}

/// Token identifying one fetch generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    generation: u64,
}

impl RequestGuard {
    /// Create a guard with no fetches issued yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, invalidating all earlier tokens
    pub fn begin(&self) -> RequestToken {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        RequestToken { generation }
    }

    /// Whether a response for this token may still be applied
    pub fn accept(&self, token: RequestToken) -> bool {
        token.generation == self.generation.load(Ordering::SeqCst)
    }
}
