//! One-way "the feed is stale" signal from the upload side to the feed.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Carries no data; the receiver refetches on its own terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedInvalidated;

#[derive(Debug, Clone)]
pub struct InvalidationSender(UnboundedSender<FeedInvalidated>);

#[derive(Debug)]
pub struct InvalidationReceiver(UnboundedReceiver<FeedInvalidated>);

pub fn channel() -> (InvalidationSender, InvalidationReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (InvalidationSender(tx), InvalidationReceiver(rx))
}

impl InvalidationSender {
    /// Fire and forget; a dropped receiver is not an error for the sender.
    pub fn notify(&self) {
        if self.0.send(FeedInvalidated).is_err() {
            log::debug!("Feed invalidation dropped: no receiver");
        }
    }
}

impl InvalidationReceiver {
    /// Drains every queued signal, returning how many there were.
    pub fn drain(&mut self) -> usize {
        let mut count = 0;
        while self.0.try_recv().is_ok() {
            count += 1;
        }
        count
    }
}
