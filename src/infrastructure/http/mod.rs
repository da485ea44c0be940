//! HTTP transport for the shortening service.

mod client;
pub mod dto;
pub mod mapper;

pub use client::HttpTransport;
