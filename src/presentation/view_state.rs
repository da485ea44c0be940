//! View state delivered across the UI boundary.

/// The single artifact crossing into the host UI.
///
/// Exactly one state is current at any time from the UI's perspective; the
/// last delivery wins and intermediate states are not guaranteed visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    /// Nothing requested yet.
    Idle,
    /// A request sequence is in flight.
    Loading,
    /// No content to show (history is empty).
    Empty,
    /// A request ended in a terminal failure.
    Error(ErrorDetails),
    /// A request succeeded.
    Success(T),
}

/// User-facing rendition of a terminal failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetails {
    pub title: String,
    pub message: String,
    /// Label of the retry action. Present iff the failure is retry-eligible;
    /// activating it re-invokes the whole sequence from a fresh attempt 1.
    pub retry_label: Option<String>,
}
