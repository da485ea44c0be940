//! Shorten request orchestration: validation, bounded retries, history.

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use tracing::{error, info, warn};

use crate::domain::entities::ShortenedUrl;
use crate::domain::observer::ShortenObserver;
use crate::domain::transport::ShortenTransport;
use crate::error::ShortenError;
use crate::utils::url_validator::{self, CanonicalUrl};

/// Retry configuration for transient failures.
///
/// The delay before the n-th retry grows linearly: `backoff_unit * n`, with
/// no jitter and no cap beyond `max_retries`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt, so total attempts = `max_retries + 1`.
    pub max_retries: u32,
    /// Base delay unit of the linear backoff.
    pub backoff_unit: Duration,
}

impl RetryPolicy {
    /// Delay to wait after `failed_attempt` before the next attempt.
    pub fn delay_before_retry(&self, failed_attempt: u32) -> Duration {
        self.backoff_unit * failed_attempt
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            backoff_unit: Duration::from_secs(1),
        }
    }
}

/// One in-flight attempt of a retry sequence. Never retained past it.
#[derive(Debug)]
struct RequestAttempt {
    url: CanonicalUrl,
    number: u32,
}

/// Owns the lifecycle of shorten requests and the history of successes.
///
/// Each [`shorten`](Self::shorten) invocation runs an independent sequence:
/// validate, then up to `max_retries + 1` transport attempts with linear
/// backoff between them, ending in exactly one terminal notification.
/// Concurrent invocations interleave freely; there is no de-duplication of
/// overlapping requests for the same URL, and a sequence cannot be cancelled
/// once started.
///
/// The history of successful results is owned exclusively here, mutated only
/// by prepending on success; observers receive cloned snapshots.
pub struct ShortenOrchestrator<T: ShortenTransport> {
    transport: Arc<T>,
    policy: RetryPolicy,
    // Non-owning upward edge, wired after construction.
    observer: Mutex<Option<Weak<dyn ShortenObserver>>>,
    history: Mutex<Vec<ShortenedUrl>>,
}

impl<T: ShortenTransport> ShortenOrchestrator<T> {
    /// Creates an orchestrator over the given transport.
    pub fn new(transport: Arc<T>, policy: RetryPolicy) -> Self {
        Self {
            transport,
            policy,
            observer: Mutex::new(None),
            history: Mutex::new(Vec::new()),
        }
    }

    /// Wires the observer that receives lifecycle notifications.
    ///
    /// The reference is non-owning: the orchestrator never keeps the observer
    /// alive, and notifications to a dropped observer are silently skipped.
    pub fn attach_observer(&self, observer: Weak<dyn ShortenObserver>) {
        *self.observer.lock().unwrap() = Some(observer);
    }

    /// A snapshot of the history, newest first.
    pub fn history(&self) -> Vec<ShortenedUrl> {
        self.history.lock().unwrap().clone()
    }

    /// Runs one complete shorten sequence to its terminal outcome.
    ///
    /// Signals `on_loading` once up front, then delivers exactly one of
    /// `on_success` / `on_error`. Validation failures are terminal
    /// immediately; transient transport failures are retried per the
    /// [`RetryPolicy`], with the caller's context suspended across the
    /// backoff delays.
    pub async fn shorten(&self, raw_url: &str) {
        self.notify(|observer| observer.on_loading());

        let url = match url_validator::validate(raw_url) {
            Ok(url) => url,
            Err(err) => {
                warn!("rejected invalid input");
                self.notify(move |observer| observer.on_error(err));
                return;
            }
        };

        match self.run_attempts(url).await {
            Ok(entry) => {
                let history = {
                    let mut history = self.history.lock().unwrap();
                    history.insert(0, entry.clone());
                    history.clone()
                };
                info!(alias = %entry.alias, "shorten succeeded");
                self.notify(move |observer| observer.on_success(entry, history));
            }
            Err(err) => {
                error!(error = %err, "shorten failed terminally");
                self.notify(move |observer| observer.on_error(err));
            }
        }
    }

    /// Fire-and-forget form of [`shorten`](Self::shorten).
    pub fn spawn_shorten(
        self: &Arc<Self>,
        raw_url: impl Into<String>,
    ) -> tokio::task::JoinHandle<()>
    where
        T: 'static,
    {
        let orchestrator = Arc::clone(self);
        let raw_url = raw_url.into();
        tokio::spawn(async move { orchestrator.shorten(&raw_url).await })
    }

    async fn run_attempts(&self, url: CanonicalUrl) -> Result<ShortenedUrl, ShortenError> {
        let mut attempt = RequestAttempt { url, number: 1 };

        loop {
            match self.transport.create_alias(&attempt.url).await {
                Ok(entry) => return Ok(entry),
                Err(err) if err.is_retryable() && attempt.number <= self.policy.max_retries => {
                    let delay = self.policy.delay_before_retry(attempt.number);
                    warn!(
                        attempt = attempt.number,
                        error = %err,
                        delay_ms = delay.as_millis() as u64,
                        "attempt failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt.number += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn notify(&self, deliver: impl FnOnce(&dyn ShortenObserver)) {
        let observer = self
            .observer
            .lock()
            .unwrap()
            .as_ref()
            .and_then(Weak::upgrade);

        if let Some(observer) = observer {
            deliver(observer.as_ref());
        }
    }
}
