//! Connectivity state broadcasting.
//!
//! Informational collaborator only: nothing in the request path depends on it
//! for correctness. The host feeds platform reachability changes into
//! [`ConnectivityMonitor::set_connected`]; interested parties subscribe and
//! receive a deduplicated stream of boolean states. The monitor is a plain
//! injectable value, not a process-wide singleton.

use tokio::sync::watch;

/// Publishes connectivity state to any number of subscribers.
///
/// Backed by a [`watch`] channel: repeated reports of the same state are
/// dropped at the source, so subscribers only wake on actual transitions.
#[derive(Debug)]
pub struct ConnectivityMonitor {
    tx: watch::Sender<bool>,
}

impl ConnectivityMonitor {
    /// Creates a monitor with the given initial state.
    pub fn new(initially_connected: bool) -> Self {
        let (tx, _) = watch::channel(initially_connected);
        Self { tx }
    }

    /// Reports the current connectivity state.
    ///
    /// Publishing the value already held is a no-op; subscribers are only
    /// notified on change.
    pub fn set_connected(&self, connected: bool) {
        self.tx.send_if_modified(|current| {
            if *current == connected {
                false
            } else {
                *current = connected;
                true
            }
        });
    }

    /// The most recently reported state.
    pub fn is_connected(&self) -> bool {
        *self.tx.borrow()
    }

    /// Opens a new subscription.
    ///
    /// Each subscription is independent and restartable: the stream yields
    /// the state current at subscription time first, then every subsequent
    /// transition. Dropping the stream is the only cleanup required.
    pub fn subscribe(&self) -> ConnectivityStream {
        let mut rx = self.tx.subscribe();
        // Makes the first `next()` resolve immediately with the current state.
        rx.mark_changed();
        ConnectivityStream { rx }
    }
}

impl Default for ConnectivityMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

/// A deduplicated, effectively infinite stream of connectivity states.
#[derive(Debug)]
pub struct ConnectivityStream {
    rx: watch::Receiver<bool>,
}

impl ConnectivityStream {
    /// Waits for the next state.
    ///
    /// Returns `None` once the monitor has been dropped.
    pub async fn next(&mut self) -> Option<bool> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}
