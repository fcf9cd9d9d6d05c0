//! Last-request-wins sequencing for overlapping fetches.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one request issued through a [`RequestSequencer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Hands out increasing tickets; only the newest ticket is current.
///
/// One sequencer per logical slot (a page's data, a detail view's images),
/// not one per provider.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding every earlier ticket
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether no newer request was begun after `ticket`
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_ticket_wins() {
        let seq = RequestSequencer::new();
        let first = seq.begin();
        assert!(seq.is_current(first));

        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert!(second > first);
    }
}
