//! reqwest-backed implementation of the shorten transport.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::entities::ShortenedUrl;
use crate::domain::transport::ShortenTransport;
use crate::error::ShortenError;
use crate::infrastructure::http::dto::{AliasResponse, CreateAliasRequest};
use crate::infrastructure::http::mapper;
use crate::utils::url_validator::CanonicalUrl;

/// HTTP transport for the alias endpoint.
///
/// Holds a shared [`reqwest::Client`] so connections are pooled across
/// requests. Performs exactly one outbound call per invocation and maps every
/// failure into [`ShortenError`]; retry decisions belong to the orchestrator.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport for the given service base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be constructed
    /// (TLS backend initialization).
    pub fn new(base_url: impl Into<String>, request_timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn alias_endpoint(&self) -> String {
        format!("{}/api/alias", self.base_url)
    }
}

#[async_trait]
impl ShortenTransport for HttpTransport {
    async fn create_alias(&self, url: &CanonicalUrl) -> Result<ShortenedUrl, ShortenError> {
        let endpoint = self.alias_endpoint();
        debug!(%url, endpoint, "creating alias");

        let response = self
            .client
            .post(&endpoint)
            .json(&CreateAliasRequest { url: url.as_str() })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "alias request failed before a response");
                classify_request_error(&e)
            })?;

        let status = response.status().as_u16();
        if let Some(err) = classify_status(status) {
            warn!(status, error = %err, "alias request rejected");
            return Err(err);
        }

        // Losing the connection mid-body is a transport fault, not a decode
        // fault; only an unparsable complete body counts as DecodeFailure.
        let body = response.bytes().await.map_err(|e| {
            warn!(error = %e, "failed to read alias response body");
            ShortenError::Unknown
        })?;

        let dto: AliasResponse = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "failed to decode alias response body");
            ShortenError::DecodeFailure
        })?;

        Ok(mapper::to_entity(dto))
    }
}

/// Classifies an HTTP status code. Returns `None` for success statuses.
///
/// 408 maps to [`ShortenError::Timeout`] ahead of the generic 4xx arm: a
/// request timeout is transient and must stay retry-eligible.
pub(crate) fn classify_status(status: u16) -> Option<ShortenError> {
    match status {
        200..=299 => None,
        408 => Some(ShortenError::Timeout),
        400..=499 => Some(ShortenError::ClientError(status)),
        500..=599 => Some(ShortenError::ServerError(status)),
        _ => Some(ShortenError::Unknown),
    }
}

/// Classifies a request-level failure, one that produced no HTTP response.
pub(crate) fn classify_request_error(error: &reqwest::Error) -> ShortenError {
    if error.is_timeout() {
        ShortenError::Timeout
    } else if error.is_connect() {
        // Covers no-network, refused and unreachable conditions.
        ShortenError::NoConnectivity
    } else {
        ShortenError::Unknown
    }
}
