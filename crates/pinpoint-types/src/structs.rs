//! Core entity structs for the Pinpoint map preview.
//!
//! Covers the [`Event`] record shown on the map, its [`Coordinates`], and
//! the rendering descriptors ([`IconSpec`], [`TileLayer`]) handed to the
//! map engine.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::EventId;

// ---------------------------------------------------------------------------
// Geography
// ---------------------------------------------------------------------------

/// A WGS84 latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Coordinates {
    /// Latitude, -90.0 to 90.0.
    pub lat: f64,
    /// Longitude, -180.0 to 180.0.
    pub lng: f64,
}

impl Coordinates {
    /// Create a coordinate pair.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components lie inside the valid geographic range.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// A single place/time/price/tag record eligible for display on the map.
///
/// Events are immutable once seeded. Every event carries at least one tag.
/// Whether an event is free is decided by `price == 0` alone; a `"free"`
/// tag is descriptive only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Event {
    /// Unique identifier within the catalog.
    pub id: EventId,
    /// Display title.
    pub title: String,
    /// Where the event takes place.
    pub coordinates: Coordinates,
    /// Human-readable schedule, e.g. "Sat 9am". Never parsed.
    pub time_label: String,
    /// Admission price in whole dollars. Zero means free.
    pub price: u32,
    /// Lowercase labels such as `outdoors`, `indoor`, `music`.
    pub tags: BTreeSet<String>,
}

impl Event {
    /// Whether the event costs nothing to attend.
    pub const fn is_free(&self) -> bool {
        self.price == 0
    }

    /// Whether the event carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

// ---------------------------------------------------------------------------
// Rendering descriptors
// ---------------------------------------------------------------------------

/// A pixel offset or size, measured from the top-left of the icon image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PixelPoint {
    /// Horizontal component.
    pub x: i32,
    /// Vertical component.
    pub y: i32,
}

impl PixelPoint {
    /// Create a pixel point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Inline SVG of the indigo map pin, 32x40 with the tip at the bottom centre.
pub const DEFAULT_PIN_ICON_URL: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHdpZHRoPSIzMiIgaGVpZ2h0PSI0MCIgdmlld0JveD0iMCAwIDMyIDQwIj48cGF0aCBkPSJNMTYgMEM3LjIgMCAwIDcuMiAwIDE2YzAgMTIgMTYgMjQgMTYgMjRzMTYtMTIgMTYtMjRjMC04LjgtNy4yLTE2LTE2LTE2em0wIDI0Yy00LjQgMC04LTMuNi04LThjMC00LjQgMy42LTggOC04czggMy42IDggOGMwIDQuNC0zLjYgOC04IDh6IiBmaWxsPSIjNGY0NmU1Ii8+PC9zdmc+";

/// Custom marker icon: image reference, fixed size, and anchor offsets.
///
/// The icon anchor is chosen so the pin tip touches the event coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct IconSpec {
    /// Image URL (may be a `data:` URL).
    pub url: String,
    /// Rendered icon size in pixels.
    pub size: PixelPoint,
    /// Pixel of the image that sits on the coordinate.
    pub anchor: PixelPoint,
    /// Where popups open, relative to the anchor.
    pub popup_anchor: PixelPoint,
}

impl Default for IconSpec {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_PIN_ICON_URL),
            size: PixelPoint::new(32, 40),
            anchor: PixelPoint::new(16, 40),
            popup_anchor: PixelPoint::new(0, -40),
        }
    }
}

/// Base map imagery source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TileLayer {
    /// Slippy-map URL template with `{s}`, `{z}`, `{x}`, `{y}` placeholders.
    pub url_template: String,
    /// Attribution HTML shown in the map corner.
    pub attribution: String,
    /// Highest zoom level the source serves.
    pub max_zoom: u8,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: String::from("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"),
            attribution: String::from(
                "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
            ),
            max_zoom: 19,
        }
    }
}
