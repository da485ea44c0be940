//! Presentation layer: view states and the adapter to the host UI.

pub mod dispatch;
mod presenter;
mod view_model;
mod view_state;

pub use dispatch::{ChannelDispatcher, Dispatcher, InlineDispatcher};
pub use presenter::{ShortenDisplay, ShortenPresenter};
pub use view_model::{HistoryItem, ShortenViewModel};
pub use view_state::{ErrorDetails, ViewState};
