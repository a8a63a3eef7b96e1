//! Guards against stale responses: only the newest request may apply its result.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared counter of issued requests. Clones observe the same counter.
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    latest: Arc<AtomicU64>,
}

/// Proof of which request a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request, superseding every ticket issued before.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Supersedes every outstanding ticket without starting a new request.
    pub fn cancel(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Runs `apply` only if `ticket` is still the newest request.
    pub fn apply_if_current<F: FnOnce()>(&self, ticket: &RequestTicket, apply: F) -> bool {
        if self.is_current(ticket) {
            apply();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_supersedes_older() {
        let generation = RequestGeneration::new();
        let first = generation.begin();
        assert!(generation.is_current(&first));

        let second = generation.begin();
        assert!(!generation.is_current(&first));
        assert!(generation.is_current(&second));
    }

    #[test]
    fn stale_result_is_dropped() {
        let generation = RequestGeneration::new();
        let slow = generation.begin();
        let fast = generation.begin();

        let mut shown = Vec::new();
        // the newer request completes first, then the older one arrives
        generation.apply_if_current(&fast, || shown.push("fast"));
        let applied = generation.apply_if_current(&slow, || shown.push("slow"));

        assert!(!applied);
        assert_eq!(shown, vec!["fast"]);
    }

    #[test]
    fn cancelled_request_cannot_apply() {
        let generation = RequestGeneration::new();
        let pending = generation.begin();
        generation.cancel();

        let mut shown = None;
        let applied = generation.apply_if_current(&pending, || shown = Some("pending"));
        assert!(!applied);
        assert_eq!(shown, None);

        let next = generation.begin();
        assert!(generation.is_current(&next));
    }

    #[test]
    fn clones_share_the_counter() {
        let generation = RequestGeneration::new();
        let ticket = generation.begin();
        let other = generation.clone();
        other.begin();
        assert!(!generation.is_current(&ticket));
    }
}
