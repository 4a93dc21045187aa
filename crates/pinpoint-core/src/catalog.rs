//! The immutable, ordered event catalog.
//!
//! The catalog is supplied pre-validated: every event has coordinates in
//! range and a non-empty tag set. Nothing here fetches, parses, or
//! validates records.

use pinpoint_types::{Coordinates, Event, EventId};

/// An ordered, read-only collection of [`Event`] records.
///
/// Order is significant: filtered views and the marker layer preserve it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    /// Wrap an already-validated sequence of events.
    pub const fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// All events in catalog order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the catalog holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Look up an event by id.
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }
}

impl From<Vec<Event>> for EventCatalog {
    fn from(events: Vec<Event>) -> Self {
        Self::new(events)
    }
}

/// Build an event from borrowed fields.
fn event(
    id: u32,
    title: &str,
    lat: f64,
    lng: f64,
    time_label: &str,
    price: u32,
    tags: &[&str],
) -> Event {
    Event {
        id: EventId(id),
        title: String::from(title),
        coordinates: Coordinates::new(lat, lng),
        time_label: String::from(time_label),
        price,
        tags: tags.iter().map(|t| String::from(*t)).collect(),
    }
}

/// The demo catalog shown on the marketing site: five events around
/// San Luis Obispo.
pub fn seed_catalog() -> EventCatalog {
    EventCatalog::new(vec![
        event(1, "Sunset Hike", 35.2828, -120.6596, "Today 6:30pm", 0, &["outdoors", "free"]),
        event(2, "Open Mic Night", 35.277, -120.6637, "Tonight 8pm", 5, &["music", "indoor"]),
        event(3, "Farmers Market", 35.2849, -120.6597, "Sat 9am", 0, &["food", "free", "outdoors"]),
        event(
            4,
            "Beach Volleyball",
            35.3004,
            -120.8652,
            "Sun 4pm",
            0,
            &["sports", "outdoors", "free"],
        ),
        event(5, "Board Game Night", 35.2794, -120.6631, "Fri 7pm", 10, &["indoor", "social"]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_has_five_events_in_id_order() {
        let catalog = seed_catalog();
        let ids: Vec<u32> = catalog.events().iter().map(|e| e.id.into_inner()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn seed_events_are_well_formed() {
        for event in seed_catalog().events() {
            assert!(!event.tags.is_empty(), "{} has no tags", event.title);
            assert!(event.coordinates.is_valid(), "{} is off the map", event.title);
        }
    }

    #[test]
    fn get_by_id() {
        let catalog = seed_catalog();
        assert_eq!(
            catalog.get(EventId(3)).map(|e| e.title.as_str()),
            Some("Farmers Market")
        );
        assert!(catalog.get(EventId(99)).is_none());
    }

    #[test]
    fn empty_catalog() {
        let catalog = EventCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
