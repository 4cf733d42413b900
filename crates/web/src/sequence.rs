//! Monotonic request tickets for discarding stale responses.

use std::cell::Cell;

/// Ticket handed out when a request starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Sequence of requests that write to the same place.
///
/// A response may only be applied while its ticket is still the latest one
/// issued; anything older has been superseded.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: Cell<u64>,
}

impl RequestSequence {
    pub fn begin(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let seq = RequestSequence::default();
        let first = seq.begin();
        assert!(seq.is_current(first));

        let second = seq.begin();
        assert!(second > first);
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
