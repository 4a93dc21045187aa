//! Quick-filter keys and the fixed filter vocabulary.
//!
//! A [`FilterKey`] is matched exactly as written. The key `free` is special:
//! it matches on price rather than tag membership. Every other key matches
//! an event tag of the same name, so `FREE` or `Outdoors` match nothing.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The literal key that selects events by price instead of by tag.
pub const FREE_KEY: &str = "free";

/// A quick-filter criterion, compared byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FilterKey(String);

impl FilterKey {
    /// Create a key from its exact text.
    pub fn new(raw: &str) -> Self {
        Self(String::from(raw))
    }

    /// The `free` key.
    pub fn free() -> Self {
        Self(String::from(FREE_KEY))
    }

    /// Whether this is the price-based `free` key.
    pub fn is_free(&self) -> bool {
        self.0 == FREE_KEY
    }

    /// Borrow the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for FilterKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FilterKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// A quick-filter chip offered by the control surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct QuickFilter {
    /// Key toggled by the chip.
    pub key: FilterKey,
    /// Button caption.
    pub label: String,
}

/// The quick-filter vocabulary in display order.
pub fn quick_filters() -> Vec<QuickFilter> {
    [("free", "Free"), ("outdoors", "Outdoors"), ("indoor", "Indoors")]
        .into_iter()
        .map(|(key, label)| QuickFilter {
            key: FilterKey::new(key),
            label: String::from(label),
        })
        .collect()
}
