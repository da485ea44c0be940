//! Client configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup; every variable has a sensible
//! default so a bare environment still produces a working client.
//!
//! ## Variables
//!
//! - `SHORTENER_BASE_URL` - Service base URL (default: the public instance)
//! - `REQUEST_TIMEOUT_SECS` - Per-request timeout in seconds (default: 15)
//! - `SHORTEN_MAX_RETRIES` - Retries after the first attempt (default: 2)
//! - `SHORTEN_BACKOFF_MS` - Backoff unit in milliseconds (default: 1000)
//! - `RUST_LOG` - Log level (default: `info`)

use anyhow::{Context, Result, bail};
use std::env;
use std::time::Duration;

use crate::application::services::RetryPolicy;

/// Default public instance of the shortening service.
pub const DEFAULT_BASE_URL: &str = "https://url-shortener-server.onrender.com";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the shortening service, without a trailing slash.
    pub base_url: String,
    /// Timeout applied to each individual transport call.
    pub request_timeout: Duration,
    /// Number of retries after the first attempt for transient failures.
    pub max_retries: u32,
    /// Base delay unit of the linear backoff between attempts.
    pub backoff_unit: Duration,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SHORTENER_BASE_URL` is set but empty, or if a
    /// numeric variable is set but unparsable.
    pub fn from_env() -> Result<Self> {
        let base_url = match env::var("SHORTENER_BASE_URL") {
            Ok(v) if v.trim().is_empty() => bail!("SHORTENER_BASE_URL must not be empty"),
            Ok(v) => v.trim_end_matches('/').to_string(),
            Err(_) => DEFAULT_BASE_URL.to_string(),
        };

        let request_timeout = Duration::from_secs(
            parse_env("REQUEST_TIMEOUT_SECS")?.unwrap_or(15),
        );

        let max_retries = parse_env("SHORTEN_MAX_RETRIES")?.unwrap_or(2);

        let backoff_unit = Duration::from_millis(
            parse_env("SHORTEN_BACKOFF_MS")?.unwrap_or(1_000),
        );

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            base_url,
            request_timeout,
            max_retries,
            backoff_unit,
            log_level,
        })
    }

    /// Retry policy derived from this configuration.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            backoff_unit: self.backoff_unit,
        }
    }

    /// Logs the effective configuration at startup.
    pub fn log_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Request timeout: {:?}", self.request_timeout);
        tracing::info!("  Max retries: {}", self.max_retries);
        tracing::info!("  Backoff unit: {:?}", self.backoff_unit);
        tracing::info!("  Log level: {}", self.log_level);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(15),
            max_retries: 2,
            backoff_unit: Duration::from_secs(1),
            log_level: "info".to_string(),
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(v) => {
            let parsed = v
                .trim()
                .parse()
                .with_context(|| format!("{name} has an invalid value: {v:?}"))?;
            Ok(Some(parsed))
        }
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var manipulation is process-global, so everything runs in one test.
    #[test]
    fn test_from_env() {
        unsafe {
            env::remove_var("SHORTENER_BASE_URL");
            env::remove_var("REQUEST_TIMEOUT_SECS");
            env::remove_var("SHORTEN_MAX_RETRIES");
            env::remove_var("SHORTEN_BACKOFF_MS");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.backoff_unit, Duration::from_secs(1));

        unsafe {
            env::set_var("SHORTENER_BASE_URL", "https://short.example.com/");
            env::set_var("SHORTEN_MAX_RETRIES", "5");
            env::set_var("SHORTEN_BACKOFF_MS", "250");
        }

        let config = Config::from_env().unwrap();
        // Trailing slash is dropped so path joining stays predictable.
        assert_eq!(config.base_url, "https://short.example.com");
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.backoff_unit, Duration::from_millis(250));

        let policy = config.retry_policy();
        assert_eq!(policy.max_retries, 5);
        assert_eq!(policy.backoff_unit, Duration::from_millis(250));

        unsafe {
            env::set_var("SHORTEN_MAX_RETRIES", "not-a-number");
        }
        assert!(Config::from_env().is_err());

        unsafe {
            env::remove_var("SHORTENER_BASE_URL");
            env::remove_var("SHORTEN_MAX_RETRIES");
            env::remove_var("SHORTEN_BACKOFF_MS");
        }
    }
}
