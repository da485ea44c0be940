//! View models rendered by the host UI.

use crate::domain::entities::ShortenedUrl;

/// Display data for one successful shorten outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenViewModel {
    pub short_url: String,
    pub original_url: String,
    /// Full history, newest first, ready for list rendering without further
    /// queries.
    pub history: Vec<HistoryItem>,
}

/// One row of the history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    pub original: String,
    pub short: String,
    pub alias: String,
}

impl From<&ShortenedUrl> for HistoryItem {
    fn from(entry: &ShortenedUrl) -> Self {
        Self {
            original: entry.original_url.clone(),
            short: entry.short_url.clone(),
            alias: entry.alias.clone(),
        }
    }
}
