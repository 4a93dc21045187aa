//! Leaflet adapter and preview server for the Pinpoint map widget.
//!
//! This crate provides the concrete side of the map boundary:
//!
//! - **[`LeafletScript`]**, a [`MapPort`] that emits Leaflet JavaScript
//!   instead of drawing, so the widget can be server-rendered
//! - **Templates** for the widget region and a minimal host page
//! - **An Axum server** exposing the region and a small JSON API
//!
//! Filter state lives in the request query; nothing is persisted.
//!
//! [`LeafletScript`]: leaflet::LeafletScript
//! [`MapPort`]: pinpoint_core::MapPort

pub mod error;
pub mod handlers;
pub mod leaflet;
pub mod render;
pub mod router;
pub mod server;
pub mod state;

pub use error::PreviewError;
pub use leaflet::LeafletScript;
pub use render::{PreviewRenderer, WidgetRegion, build_region};
pub use router::build_router;
pub use server::{ServerError, start_server};
pub use state::AppState;
