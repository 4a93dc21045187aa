//! Filter state and the conjunctive filter engine.
//!
//! [`filter`] is a pure function: it never mutates its inputs and returns
//! the same output for the same catalog and filter set, so it is safe to
//! call on every render.

use std::collections::BTreeSet;

use pinpoint_types::{Event, FilterKey};

/// The set of currently active quick-filter keys.
///
/// Created empty when the widget mounts and changed only through
/// [`FilterState::toggle`]. Set semantics: order is irrelevant and a key is
/// either present or absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    active: BTreeSet<FilterKey>,
}

impl FilterState {
    /// An empty filter set, which passes every event.
    pub const fn new() -> Self {
        Self {
            active: BTreeSet::new(),
        }
    }

    /// Remove `key` if active, otherwise add it.
    ///
    /// Returns `true` if the key is active after the call. Toggling the
    /// same key twice restores the previous state.
    pub fn toggle(&mut self, key: FilterKey) -> bool {
        if self.active.remove(&key) {
            false
        } else {
            self.active.insert(key);
            true
        }
    }

    /// A copy of this state with `key` toggled.
    #[must_use]
    pub fn toggled(&self, key: &FilterKey) -> Self {
        let mut next = self.clone();
        next.toggle(key.clone());
        next
    }

    /// Whether `key` is currently active.
    pub fn is_active(&self, key: &FilterKey) -> bool {
        self.active.contains(key)
    }

    /// Whether no filter is active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Number of active keys.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Active keys in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &FilterKey> {
        self.active.iter()
    }
}

impl FromIterator<FilterKey> for FilterState {
    fn from_iter<I: IntoIterator<Item = FilterKey>>(iter: I) -> Self {
        Self {
            active: iter.into_iter().collect(),
        }
    }
}

/// Whether `event` satisfies a single filter key.
///
/// `free` is satisfied by `price == 0` regardless of tags. Any other key
/// is satisfied by tag membership, so a key with no matching tag anywhere
/// simply matches nothing.
pub fn matches_key(event: &Event, key: &FilterKey) -> bool {
    if key.is_free() {
        event.is_free()
    } else {
        event.has_tag(key.as_str())
    }
}

/// Compute the visible subset of `events` for the active filter set.
///
/// An empty filter set passes everything. Otherwise an event is kept only
/// if it satisfies every active key. Relative order is preserved.
pub fn filter<'a>(events: &'a [Event], active: &FilterState) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| active.iter().all(|key| matches_key(event, key)))
        .collect()
}

#[cfg(test)]
mod tests {
    use pinpoint_types::{Coordinates, EventId};

    use super::*;
    use crate::catalog::seed_catalog;

    fn ids(events: &[&Event]) -> Vec<u32> {
        events.iter().map(|e| e.id.into_inner()).collect()
    }

    fn state(keys: &[&str]) -> FilterState {
        keys.iter().map(|k| FilterKey::new(k)).collect()
    }

    #[test]
    fn empty_filter_is_identity() {
        let catalog = seed_catalog();
        let visible = filter(catalog.events(), &FilterState::new());
        assert_eq!(ids(&visible), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn free_selects_by_price() {
        let catalog = seed_catalog();
        let visible = filter(catalog.events(), &state(&["free"]));
        assert_eq!(ids(&visible), vec![1, 3, 4]);
    }

    #[test]
    fn free_ignores_the_free_tag() {
        let events = vec![
            Event {
                id: EventId(1),
                title: String::from("Tagged but paid"),
                coordinates: Coordinates::new(0.0, 0.0),
                time_label: String::from("Mon"),
                price: 3,
                tags: ["free"].iter().map(|t| String::from(*t)).collect(),
            },
            Event {
                id: EventId(2),
                title: String::from("Untagged but free"),
                coordinates: Coordinates::new(0.0, 0.0),
                time_label: String::from("Tue"),
                price: 0,
                tags: ["music"].iter().map(|t| String::from(*t)).collect(),
            },
        ];
        assert_eq!(ids(&filter(&events, &state(&["free"]))), vec![2]);
    }

    #[test]
    fn tag_filters() {
        let catalog = seed_catalog();
        assert_eq!(ids(&filter(catalog.events(), &state(&["indoor"]))), vec![2, 5]);
        assert_eq!(ids(&filter(catalog.events(), &state(&["music"]))), vec![2]);
    }

    #[test]
    fn keys_combine_conjunctively() {
        let catalog = seed_catalog();
        assert_eq!(
            ids(&filter(catalog.events(), &state(&["outdoors", "free"]))),
            vec![1, 3, 4]
        );
        assert!(filter(catalog.events(), &state(&["indoor", "free"])).is_empty());
    }

    #[test]
    fn unknown_key_matches_nothing() {
        let catalog = seed_catalog();
        assert!(filter(catalog.events(), &state(&["karaoke"])).is_empty());
    }

    #[test]
    fn keys_are_case_sensitive() {
        let catalog = seed_catalog();
        assert!(filter(catalog.events(), &state(&["Outdoors"])).is_empty());
        assert!(filter(catalog.events(), &state(&["FREE"])).is_empty());
        assert!(filter(catalog.events(), &state(&[" free"])).is_empty());
    }

    #[test]
    fn result_is_an_ordered_subset() {
        let catalog = seed_catalog();
        let cases: [&[&str]; 4] = [&["free"], &["indoor"], &["outdoors"], &["food", "free"]];
        for keys in cases {
            let visible = filter(catalog.events(), &state(keys));
            let mut last = None;
            for event in &visible {
                let pos = catalog.events().iter().position(|e| e.id == event.id);
                assert!(pos.is_some());
                assert!(pos > last, "order not preserved for {keys:?}");
                last = pos;
            }
        }
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut filters = state(&["indoor"]);
        let before = filters.clone();
        assert!(filters.toggle(FilterKey::free()));
        assert!(filters.is_active(&FilterKey::free()));
        assert!(!filters.toggle(FilterKey::free()));
        assert_eq!(filters, before);
    }

    #[test]
    fn toggled_leaves_receiver_untouched() {
        let filters = FilterState::new();
        let next = filters.toggled(&FilterKey::new("outdoors"));
        assert!(filters.is_empty());
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn duplicate_keys_collapse() {
        assert_eq!(state(&["free", "free"]).len(), 1);
        assert_eq!(state(&["free", "FREE"]).len(), 2);
    }
}
