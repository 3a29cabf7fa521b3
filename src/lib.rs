pub mod cache;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod overlay;
pub mod page;
pub mod render;
pub mod source;
pub mod types;

// --- Library API for embedding ---

/// Convenience re-exports for embedders.
pub mod prelude {
    pub use crate::cache::RecordCache;
    pub use crate::config::GalleryConfig;
    pub use crate::controller::{Controller, Event, FetchState, Key};
    pub use crate::error::{FetchError, FilterError};
    pub use crate::filter::{filter, DateRange};
    pub use crate::overlay::{Dismiss, Overlay, OverlayView};
    pub use crate::page::{Card, Grid, Page, Placeholder};
    pub use crate::render::render;
    pub use crate::source::{parse_payload, HttpSource, RecordSource};
    pub use crate::types::{MediaType, Record};
}

use crate::config::GalleryConfig;
use crate::controller::Controller;
use crate::error::FetchError;
use crate::source::HttpSource;

/// Controller wired to the configured HTTP feed.
pub fn http_gallery(config: &GalleryConfig) -> Result<Controller<HttpSource>, FetchError> {
    let source = HttpSource::new(config.feed_url.clone(), config.request_timeout)?;
    Ok(Controller::new(source, config))
}
