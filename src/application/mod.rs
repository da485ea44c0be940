//! Application layer: request lifecycle orchestration.

pub mod services;
