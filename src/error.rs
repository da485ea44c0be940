//! Failure taxonomy shared by every layer of the client.
//!
//! The validator and the transport classify every failure into [`ShortenError`]
//! before it crosses a component boundary; nothing downstream ever sees a raw
//! `reqwest` or `serde` error. The orchestrator consumes the classification to
//! decide between retrying and failing terminally, and the presenter consumes
//! the `Display` text as the user-facing message.

/// A classified failure of one shorten request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortenError {
    /// The input string is not an absolute http(s) URL with a host.
    #[error("The provided text is not a valid URL")]
    InvalidInput,

    /// The device has no usable network path.
    #[error("No internet connection available")]
    NoConnectivity,

    /// The request timed out, either at the transport or as HTTP 408.
    #[error("The request timed out")]
    Timeout,

    /// The service rejected the request (HTTP 4xx other than 408).
    #[error("The request was rejected by the service (HTTP {0})")]
    ClientError(u16),

    /// The service failed to process the request (HTTP 5xx).
    #[error("The service failed to process the request (HTTP {0})")]
    ServerError(u16),

    /// A 2xx response carried a body that could not be decoded.
    #[error("The service response could not be read")]
    DecodeFailure,

    /// Mandatory fallback for anything outside the taxonomy.
    #[error("An unexpected error occurred")]
    Unknown,
}

impl ShortenError {
    /// Whether the orchestrator may retry after this failure.
    ///
    /// Only transient conditions qualify: timeouts, server-side failures and
    /// missing connectivity. Input errors, 4xx rejections, decode failures
    /// and the unknown fallback are terminal on the first occurrence.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout | Self::ServerError(_) | Self::NoConnectivity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_kinds() {
        assert!(ShortenError::Timeout.is_retryable());
        assert!(ShortenError::ServerError(500).is_retryable());
        assert!(ShortenError::ServerError(503).is_retryable());
        assert!(ShortenError::NoConnectivity.is_retryable());
    }

    #[test]
    fn test_non_retryable_kinds() {
        assert!(!ShortenError::InvalidInput.is_retryable());
        assert!(!ShortenError::ClientError(404).is_retryable());
        assert!(!ShortenError::DecodeFailure.is_retryable());
        assert!(!ShortenError::Unknown.is_retryable());
    }

    #[test]
    fn test_display_includes_status_code() {
        assert_eq!(
            ShortenError::ServerError(502).to_string(),
            "The service failed to process the request (HTTP 502)"
        );
        assert_eq!(
            ShortenError::ClientError(404).to_string(),
            "The request was rejected by the service (HTTP 404)"
        );
    }
}
