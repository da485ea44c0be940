//! Shortened URL entity.

/// A successfully shortened URL as reported by the service.
///
/// Immutable value with structural identity; two entries with the same alias
/// and URLs compare equal. The client enforces no uniqueness beyond what the
/// service guarantees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    /// Short identifier assigned by the service.
    pub alias: String,
    /// The original URL as echoed back by the service.
    pub original_url: String,
    /// The full shortened URL.
    pub short_url: String,
}

impl ShortenedUrl {
    /// Creates a new ShortenedUrl instance.
    pub fn new(alias: String, original_url: String, short_url: String) -> Self {
        Self {
            alias,
            original_url,
            short_url,
        }
    }
}
