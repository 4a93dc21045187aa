//! Shared type definitions for the Pinpoint map preview.
//!
//! This crate is the single source of truth for the records the map
//! widget displays and the descriptors it hands to a map engine. Types
//! flow downstream to `TypeScript` via `ts-rs` for the marketing site.
//!
//! # Modules
//!
//! - [`ids`] -- Integer identifier wrappers
//! - [`structs`] -- Events, coordinates, icon and tile descriptors
//! - [`filter`] -- Quick-filter keys and the chip vocabulary

pub mod filter;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use filter::{FREE_KEY, FilterKey, QuickFilter, quick_filters};
pub use ids::EventId;
pub use structs::{
    Coordinates, DEFAULT_PIN_ICON_URL, Event, IconSpec, PixelPoint, TileLayer,
};
