//! Domain layer: entities and the ports the application layer depends on.

pub mod entities;
pub mod observer;
pub mod transport;

pub use entities::ShortenedUrl;
pub use observer::ShortenObserver;
pub use transport::ShortenTransport;
