//! Delivery marshaling onto the host rendering context.
//!
//! The core never assumes it runs on the context the UI observes from. Every
//! display delivery goes through an explicit [`Dispatcher`], injected by the
//! host, instead of a hidden global queue.

use tokio::sync::mpsc;

/// Executes display deliveries on the host's chosen context.
pub trait Dispatcher: Send + Sync {
    fn dispatch(&self, work: Box<dyn FnOnce() + Send>);
}

/// Runs deliveries immediately on the calling context.
///
/// Suitable for hosts whose display collaborator is already context-safe,
/// and for tests.
#[derive(Debug, Default)]
pub struct InlineDispatcher;

impl Dispatcher for InlineDispatcher {
    fn dispatch(&self, work: Box<dyn FnOnce() + Send>) {
        work();
    }
}

/// Forwards deliveries into a channel drained by the host's own loop.
///
/// The host holds the receiver on its single-threaded rendering context and
/// executes each unit of work in arrival order.
#[derive(Debug)]
pub struct ChannelDispatcher {
    tx: mpsc::UnboundedSender<Box<dyn FnOnce() + Send>>,
}

impl ChannelDispatcher {
    /// Creates a dispatcher and the receiver the host loop drains.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Box<dyn FnOnce() + Send>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Dispatcher for ChannelDispatcher {
    fn dispatch(&self, work: Box<dyn FnOnce() + Send>) {
        // If the host loop is gone the delivery is dropped, matching the
        // non-owning observer semantics.
        let _ = self.tx.send(work);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_inline_dispatcher_runs_immediately() {
        let count = Arc::new(AtomicUsize::new(0));
        let dispatcher = InlineDispatcher;

        let counter = Arc::clone(&count);
        dispatcher.dispatch(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_channel_dispatcher_defers_to_receiver() {
        let count = Arc::new(AtomicUsize::new(0));
        let (dispatcher, mut rx) = ChannelDispatcher::new();

        let counter = Arc::clone(&count);
        dispatcher.dispatch(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        // Nothing runs until the host loop drains the channel.
        assert_eq!(count.load(Ordering::SeqCst), 0);

        let work = rx.recv().await.unwrap();
        work();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_channel_dispatcher_drops_work_without_receiver() {
        let (dispatcher, rx) = ChannelDispatcher::new();
        drop(rx);

        // Must not panic.
        dispatcher.dispatch(Box::new(|| {}));
    }
}
