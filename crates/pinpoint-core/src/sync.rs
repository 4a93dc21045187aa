//! Marker synchronization.
//!
//! Every filter change rebuilds the marker group from scratch: clear it,
//! then add one pin per visible event in catalog order. Event counts are
//! small, and a full rebuild can never leave a stale or duplicate pin
//! behind.
//!
//! Popup text is interpolated into HTML as-is. Titles and time labels come
//! from the static catalog; if they ever become user-submitted they must be
//! escaped before reaching [`PopupContent::to_html`].

use core::fmt;

use pinpoint_types::{Event, IconSpec};
use tracing::debug;

use crate::port::MapPort;

/// How an event's price is shown to visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceDisplay {
    /// Price is zero.
    Free,
    /// Admission in whole dollars.
    Paid(u32),
}

impl PriceDisplay {
    /// Classify a price. Zero is the only free price.
    pub const fn from_price(price: u32) -> Self {
        if price == 0 { Self::Free } else { Self::Paid(price) }
    }
}

impl fmt::Display for PriceDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => f.write_str("Free"),
            Self::Paid(dollars) => write!(f, "${dollars}"),
        }
    }
}

/// The three lines shown in a marker popup.
///
/// `Display` renders the plain-text form, one line each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupContent<'a> {
    /// Event title, shown in bold.
    pub title: &'a str,
    /// Free-text schedule.
    pub time_label: &'a str,
    /// Formatted price.
    pub price: PriceDisplay,
}

impl<'a> PopupContent<'a> {
    /// Popup content for `event`.
    pub fn for_event(event: &'a Event) -> Self {
        Self {
            title: event.title.as_str(),
            time_label: event.time_label.as_str(),
            price: PriceDisplay::from_price(event.price),
        }
    }

    /// The HTML fragment bound to the marker.
    pub fn to_html(&self) -> String {
        format!(
            "<strong>{}</strong><br/>{}<br/>{}",
            self.title, self.time_label, self.price
        )
    }
}

impl fmt::Display for PopupContent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.title, self.time_label, self.price)
    }
}

/// Rebuild `group` so it holds exactly one marker per event in `visible`.
///
/// Returns the number of markers added, which always equals
/// `visible.len()`.
pub fn sync_markers<P: MapPort>(
    port: &mut P,
    group: &P::Group,
    visible: &[&Event],
    icon: &IconSpec,
) -> usize {
    port.clear_group(group);
    for event in visible {
        let popup = PopupContent::for_event(event).to_html();
        port.add_marker(group, event.coordinates, icon, &popup);
    }
    debug!(markers = visible.len(), "Marker group synchronized");
    visible.len()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pinpoint_types::{Coordinates, EventId};

    use super::*;
    use crate::catalog::seed_catalog;
    use crate::recording::{PortCall, RecordingPort};

    #[test]
    fn price_display() {
        assert_eq!(PriceDisplay::from_price(0).to_string(), "Free");
        assert_eq!(PriceDisplay::from_price(5).to_string(), "$5");
        assert_eq!(PriceDisplay::from_price(10).to_string(), "$10");
    }

    #[test]
    fn popup_lines() {
        let catalog = seed_catalog();
        let hike = catalog.get(EventId(1)).unwrap();
        let popup = PopupContent::for_event(hike);
        assert_eq!(popup.to_string(), "Sunset Hike\nToday 6:30pm\nFree");
        assert_eq!(
            popup.to_html(),
            "<strong>Sunset Hike</strong><br/>Today 6:30pm<br/>Free"
        );
    }

    #[test]
    fn paid_popup_html() {
        let event = Event {
            id: EventId(2),
            title: String::from("Open Mic Night"),
            coordinates: Coordinates::new(35.277, -120.6637),
            time_label: String::from("Tonight 8pm"),
            price: 5,
            tags: ["music"].iter().map(|t| String::from(*t)).collect(),
        };
        assert_eq!(
            PopupContent::for_event(&event).to_html(),
            "<strong>Open Mic Night</strong><br/>Tonight 8pm<br/>$5"
        );
    }

    #[test]
    fn sync_clears_before_adding() {
        let catalog = seed_catalog();
        let mut port = RecordingPort::new();
        let map = port.create_view("map", Coordinates::new(0.0, 0.0), 12, true);
        let group = port.create_marker_group(&map);
        port.clear_calls();

        let visible: Vec<&Event> = catalog.events().iter().collect();
        let added = sync_markers(&mut port, &group, &visible, &IconSpec::default());

        assert_eq!(added, 5);
        assert_eq!(port.calls().first(), Some(&PortCall::ClearGroup { group }));
        assert_eq!(port.calls().len(), 6);
    }

    #[test]
    fn resync_leaves_no_stale_markers() {
        let catalog = seed_catalog();
        let mut port = RecordingPort::new();
        let map = port.create_view("map", Coordinates::new(0.0, 0.0), 12, true);
        let group = port.create_marker_group(&map);
        let icon = IconSpec::default();

        let all: Vec<&Event> = catalog.events().iter().collect();
        sync_markers(&mut port, &group, &all, &icon);
        let one: Vec<&Event> = catalog.events().iter().take(1).collect();
        sync_markers(&mut port, &group, &one, &icon);

        let markers = port.markers_in(group);
        assert_eq!(markers.len(), 1);
        assert_eq!(
            markers.first().map(|m| m.popup_html.as_str()),
            Some("<strong>Sunset Hike</strong><br/>Today 6:30pm<br/>Free")
        );
    }

    #[test]
    fn markers_follow_visible_order() {
        let catalog = seed_catalog();
        let mut port = RecordingPort::new();
        let map = port.create_view("map", Coordinates::new(0.0, 0.0), 12, true);
        let group = port.create_marker_group(&map);

        let visible: Vec<&Event> = catalog.events().iter().rev().collect();
        sync_markers(&mut port, &group, &visible, &IconSpec::default());

        let placed: Vec<Coordinates> = port.markers_in(group).iter().map(|m| m.at).collect();
        let expected: Vec<Coordinates> = visible.iter().map(|e| e.coordinates).collect();
        assert_eq!(placed, expected);
    }
}
