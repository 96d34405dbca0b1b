use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::Place;

/// Guard against stale search responses overwriting newer ones.
///
/// Every keystroke-triggered search takes a token from [`begin`] before
/// sending its request; when the response lands, [`accept`] only lets it
/// through if no newer search has started in the meantime. Out-of-order
/// responses are discarded instead of clobbering the suggestion list.
///
/// [`begin`]: SearchSequence::begin
/// [`accept`]: SearchSequence::accept
#[derive(Debug, Default)]
pub struct SearchSequence {
    latest: AtomicU64,
}

impl SearchSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new search, superseding all earlier ones.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Accepts the results only if `token` still belongs to the newest
    /// search; stale responses come back as `None`.
    pub fn accept(&self, token: u64, results: Vec<Place>) -> Option<Vec<Place>> {
        if self.latest.load(Ordering::SeqCst) == token {
            Some(results)
        } else {
            tracing::debug!(token, "discarding stale geocode response");
            None
        }
    }
}
