//! Shared application state for the preview server.
//!
//! Everything here is read-only after startup. Filter state is never
//! stored: each request carries its own in the query string.

use pinpoint_core::{EventCatalog, MapSettings};

use crate::error::PreviewError;
use crate::render::PreviewRenderer;

/// Shared state injected into handlers via Axum's `State` extractor.
pub struct AppState {
    /// Events shown on the map.
    pub catalog: EventCatalog,
    /// Map view, tiles, and icon.
    pub settings: MapSettings,
    /// Compiled templates.
    pub renderer: PreviewRenderer,
}

impl AppState {
    /// Build state for `catalog` and `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::Template`] if the embedded templates fail to compile.
    pub fn new(catalog: EventCatalog, settings: MapSettings) -> Result<Self, PreviewError> {
        Ok(Self {
            catalog,
            settings,
            renderer: PreviewRenderer::new()?,
        })
    }
}
