//! Translates orchestrator outcomes into view states.

use std::sync::{Arc, Mutex, Weak};

use crate::domain::entities::ShortenedUrl;
use crate::domain::observer::ShortenObserver;
use crate::error::ShortenError;
use crate::presentation::dispatch::Dispatcher;
use crate::presentation::view_model::{HistoryItem, ShortenViewModel};
use crate::presentation::view_state::{ErrorDetails, ViewState};

const TITLE_GENERIC: &str = "Something went wrong";
const TITLE_INVALID_URL: &str = "Invalid URL";
const RETRY_LABEL: &str = "Try again";

/// Display collaborator implemented by the host UI.
///
/// Receives one [`ViewState`] at a time; the last delivered state wins.
/// Deliveries arrive through the presenter's [`Dispatcher`], so a host that
/// injects a context-marshaling dispatcher may observe from its
/// single-threaded rendering context.
#[cfg_attr(test, mockall::automock)]
pub trait ShortenDisplay: Send + Sync {
    fn display(&self, state: ViewState<ShortenViewModel>);
}

/// Stateless translation layer between the orchestrator and the display.
///
/// Holds the display through a non-owning [`Weak`] edge; a delivery to a
/// dropped display is silently skipped.
pub struct ShortenPresenter {
    display: Mutex<Option<Weak<dyn ShortenDisplay>>>,
    dispatcher: Arc<dyn Dispatcher>,
}

impl ShortenPresenter {
    pub fn new(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self {
            display: Mutex::new(None),
            dispatcher,
        }
    }

    /// Wires the display that receives view states.
    pub fn attach_display(&self, display: Weak<dyn ShortenDisplay>) {
        *self.display.lock().unwrap() = Some(display);
    }

    /// Presents the initial screen state before any request has run.
    pub fn present_initial(&self, history: &[ShortenedUrl]) {
        let state = if history.is_empty() {
            ViewState::Empty
        } else {
            ViewState::Idle
        };
        self.deliver(state);
    }

    fn deliver(&self, state: ViewState<ShortenViewModel>) {
        let display = self.display.lock().unwrap().clone();

        self.dispatcher.dispatch(Box::new(move || {
            if let Some(display) = display.as_ref().and_then(Weak::upgrade) {
                display.display(state);
            }
        }));
    }
}

impl ShortenObserver for ShortenPresenter {
    fn on_loading(&self) {
        self.deliver(ViewState::Loading);
    }

    fn on_success(&self, entry: ShortenedUrl, history: Vec<ShortenedUrl>) {
        let view_model = ShortenViewModel {
            short_url: entry.short_url,
            original_url: entry.original_url,
            history: history.iter().map(HistoryItem::from).collect(),
        };
        self.deliver(ViewState::Success(view_model));
    }

    fn on_error(&self, error: ShortenError) {
        self.deliver(ViewState::Error(error_details(&error)));
    }
}

/// Builds the user-facing rendition of a terminal failure.
///
/// The retry affordance is offered exactly for the retry-eligible kinds, so
/// the user can restart the sequence from a fresh attempt 1.
fn error_details(error: &ShortenError) -> ErrorDetails {
    let title = match error {
        ShortenError::InvalidInput => TITLE_INVALID_URL,
        _ => TITLE_GENERIC,
    };

    ErrorDetails {
        title: title.to_string(),
        message: error.to_string(),
        retry_label: error
            .is_retryable()
            .then(|| RETRY_LABEL.to_string()),
    }
}
