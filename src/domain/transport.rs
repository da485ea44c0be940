//! Outbound port for the shortening service.

use crate::domain::entities::ShortenedUrl;
use crate::error::ShortenError;
use crate::utils::url_validator::CanonicalUrl;
use async_trait::async_trait;

/// Transport interface for creating shortened aliases.
///
/// One invocation performs exactly one outbound call; retry policy lives in
/// the orchestrator, never here. Implementations must classify every failure
/// into [`ShortenError`] — no raw transport error may cross this boundary.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpTransport`] - reqwest-backed client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenTransport: Send + Sync {
    /// Requests a shortened alias for a validated URL.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ShortenError`] for the failing layer:
    /// connectivity loss, timeout (transport-level or HTTP 408), 4xx/5xx
    /// statuses, an undecodable 2xx body, or the unknown fallback.
    async fn create_alias(&self, url: &CanonicalUrl) -> Result<ShortenedUrl, ShortenError>;
}
