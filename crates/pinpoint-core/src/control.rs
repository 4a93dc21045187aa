//! The control surface: the chip row and live result count.

use pinpoint_types::{FilterKey, QuickFilter};
use serde::Serialize;

use crate::filter::FilterState;

/// One quick-filter chip as it should be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipState {
    /// Key toggled by the chip.
    pub key: FilterKey,
    /// Button caption.
    pub label: String,
    /// Whether the key is in the current filter set.
    pub active: bool,
}

/// Everything the host needs to draw above the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlSurface {
    /// Chips in vocabulary order.
    pub chips: Vec<ChipState>,
    /// Number of events currently on the map.
    pub visible_count: usize,
}

impl ControlSurface {
    /// Build the surface for `vocabulary` under `filters`.
    pub fn new(vocabulary: &[QuickFilter], filters: &FilterState, visible_count: usize) -> Self {
        let chips = vocabulary
            .iter()
            .map(|q| ChipState {
                key: q.key.clone(),
                label: q.label.clone(),
                active: filters.is_active(&q.key),
            })
            .collect();
        Self {
            chips,
            visible_count,
        }
    }

    /// The count caption, e.g. "Showing 3 events".
    pub fn count_label(&self) -> String {
        format!("Showing {} events", self.visible_count)
    }
}
