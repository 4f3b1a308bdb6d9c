use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Generation counter that lets a list page drop superseded responses
///
/// Each fetch takes a ticket; a response is committed only while its ticket
/// is still the latest one.
#[derive(Clone, Debug, Default)]
pub struct RequestSeq {
    latest: Arc<AtomicU64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket.0
    }

    /// Invalidate every outstanding ticket, e.g. on unmount
    pub fn cancel_all(&self) {
        self.latest.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let seq = RequestSeq::new();
        let first = seq.next();
        let second = seq.next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        seq.cancel_all();
        assert!(!seq.is_current(second));
    }
}
