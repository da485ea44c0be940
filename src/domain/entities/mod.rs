//! Core domain entities.

mod shortened_url;

pub use shortened_url::ShortenedUrl;
