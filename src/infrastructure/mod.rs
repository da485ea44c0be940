//! Infrastructure layer: outbound HTTP transport and host collaborators.

pub mod connectivity;
pub mod http;
