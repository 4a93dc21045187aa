//! Event filtering, marker synchronization, and map lifecycle for the
//! Pinpoint map preview.
//!
//! The preview widget shows a static catalog of local events as pins on an
//! interactive map. Visitors toggle quick-filter chips; every toggle
//! recomputes the visible subset and rebuilds the marker layer.
//!
//! # Modules
//!
//! - [`catalog`] -- The immutable, ordered [`EventCatalog`] and the seed data.
//! - [`config`] -- Configuration loading from `pinpoint-config.yaml`.
//! - [`control`] -- Chip row and result count shown above the map.
//! - [`error`] -- Widget lifecycle errors.
//! - [`filter`] -- [`FilterState`] and the conjunctive [`filter`] function.
//! - [`port`] -- The [`MapPort`] capability a map engine must provide.
//! - [`recording`] -- [`RecordingPort`], a `MapPort` that records calls.
//! - [`sync`] -- Clear-then-repopulate marker synchronization.
//! - [`view`] -- The `Uninitialized -> Initialized -> Disposed` state machine.
//! - [`widget`] -- [`MapWidget`], the owned state record tying it together.
//!
//! [`EventCatalog`]: catalog::EventCatalog
//! [`FilterState`]: filter::FilterState
//! [`filter`]: filter::filter
//! [`MapPort`]: port::MapPort
//! [`RecordingPort`]: recording::RecordingPort
//! [`MapWidget`]: widget::MapWidget

pub mod catalog;
pub mod config;
pub mod control;
pub mod error;
pub mod filter;
pub mod port;
pub mod recording;
pub mod sync;
pub mod view;
pub mod widget;

pub use catalog::{EventCatalog, seed_catalog};
pub use config::{ConfigError, MapSettings, PinpointConfig, ServerSettings};
pub use control::{ChipState, ControlSurface};
pub use error::WidgetError;
pub use filter::{FilterState, filter, matches_key};
pub use port::MapPort;
pub use recording::{PortCall, RecordingPort};
pub use sync::{PopupContent, PriceDisplay, sync_markers};
pub use view::{Lifecycle, ViewState};
pub use widget::{MapWidget, MountOutcome, SyncOutcome};
