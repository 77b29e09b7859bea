use crate::error::HttpError;

/// Issue-order tag of an asynchronous request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Monotonic counter that decides which completion may still commit.
///
/// Only the most recently issued ticket is current; anything older is
/// discarded on arrival no matter when it resolves.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Makes every outstanding ticket stale without issuing a new one.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

/// Result of a ticketed request, routed back into its controller.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion<T> {
    pub ticket: Ticket,
    pub result: Result<T, HttpError>,
}
