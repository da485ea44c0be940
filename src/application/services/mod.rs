//! Application services.

mod shorten_orchestrator;

pub use shorten_orchestrator::{RetryPolicy, ShortenOrchestrator};
