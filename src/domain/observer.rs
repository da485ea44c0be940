//! Observer interface for shorten request outcomes.

use crate::domain::entities::ShortenedUrl;
use crate::error::ShortenError;

/// Receives the lifecycle notifications of a shorten request.
///
/// The orchestrator holds the observer through a [`std::sync::Weak`]: the
/// upward edge is used only for callback delivery and never controls the
/// observer's lifetime. If the observer is gone when a notification fires,
/// the delivery is silently skipped.
///
/// Per `shorten` invocation, `on_loading` fires exactly once at the very
/// start, and exactly one of `on_success` / `on_error` follows as the
/// terminal outcome. Individual retry attempts are not reported.
#[cfg_attr(test, mockall::automock)]
pub trait ShortenObserver: Send + Sync {
    /// The request sequence has started.
    fn on_loading(&self);

    /// The request succeeded. `history` is a snapshot of the full history
    /// after the insert, newest first, owned by the receiver.
    fn on_success(&self, entry: ShortenedUrl, history: Vec<ShortenedUrl>);

    /// The request failed terminally after exhausting any eligible retries.
    fn on_error(&self, error: ShortenError);
}
