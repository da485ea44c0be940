//! # URL Shortener Client
//!
//! Client library for a URL shortening web service, built around a retrying
//! request orchestrator with an ordered in-memory history of results.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the transport/observer ports
//! - **Application Layer** ([`application`]) - The shorten orchestrator: retry
//!   policy, history ownership, lifecycle notifications
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest transport, wire
//!   DTOs, connectivity monitor
//! - **Presentation Layer** ([`presentation`]) - View states and the adapter
//!   delivering them to a host UI through an explicit dispatcher
//!
//! ## Request lifecycle
//!
//! `shorten(raw_url)` signals loading once, validates the input, then makes up
//! to `max_retries + 1` transport attempts with linear backoff between them
//! (1 unit before the 2nd attempt, 2 units before the 3rd). Only timeouts,
//! 5xx responses and connectivity loss are retried. Exactly one terminal
//! outcome is delivered per invocation; successes are prepended to the
//! history and the full snapshot travels with the notification.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use url_shortener_client::prelude::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let transport = Arc::new(HttpTransport::new(
//!     config.base_url.clone(),
//!     config.request_timeout,
//! )?);
//! let orchestrator = Arc::new(ShortenOrchestrator::new(
//!     transport,
//!     config.retry_policy(),
//! ));
//!
//! orchestrator.shorten("https://example.com/some/long/path").await;
//! println!("{} entries shortened", orchestrator.history().len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Runtime settings are loaded from environment variables via
//! [`config::Config`]; see the [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod utils;

pub use config::Config;
pub use error::ShortenError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{RetryPolicy, ShortenOrchestrator};
    pub use crate::config::Config;
    pub use crate::domain::{ShortenObserver, ShortenTransport, ShortenedUrl};
    pub use crate::error::ShortenError;
    pub use crate::infrastructure::connectivity::ConnectivityMonitor;
    pub use crate::infrastructure::http::HttpTransport;
    pub use crate::presentation::{
        Dispatcher, InlineDispatcher, ShortenDisplay, ShortenPresenter, ShortenViewModel,
        ViewState,
    };
    pub use crate::utils::url_validator::{CanonicalUrl, validate};
}
