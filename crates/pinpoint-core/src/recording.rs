//! A [`MapPort`] that renders nothing and records every call.
//!
//! Used by tests to observe what the widget asked the map engine to do,
//! and to count live markers per group after each synchronization.

use std::collections::BTreeMap;

use pinpoint_types::{Coordinates, IconSpec, TileLayer};

use crate::port::MapPort;

/// One call made against a [`RecordingPort`].
#[derive(Debug, Clone, PartialEq)]
pub enum PortCall {
    /// `create_view` returned map handle `map`.
    CreateView {
        /// Container the view was attached to.
        container: String,
        /// Initial centre.
        center: Coordinates,
        /// Initial zoom.
        zoom: u8,
        /// Returned handle.
        map: u32,
    },
    /// `attach_tile_layer` on `map`.
    AttachTileLayer {
        /// Target map.
        map: u32,
        /// Tile URL template.
        url_template: String,
    },
    /// `create_marker_group` on `map` returned `group`.
    CreateMarkerGroup {
        /// Owning map.
        map: u32,
        /// Returned handle.
        group: u32,
    },
    /// `clear_group` on `group`.
    ClearGroup {
        /// Cleared group.
        group: u32,
    },
    /// `add_marker` into `group`.
    AddMarker {
        /// Target group.
        group: u32,
        /// Pin position.
        at: Coordinates,
        /// Popup HTML fragment.
        popup_html: String,
    },
    /// `remove_view` on `map`.
    RemoveView {
        /// Released map.
        map: u32,
    },
}

/// A marker currently held by a recorded group.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedMarker {
    /// Pin position.
    pub at: Coordinates,
    /// Popup HTML fragment.
    pub popup_html: String,
}

/// In-memory [`MapPort`] for tests and headless use.
#[derive(Debug, Default)]
pub struct RecordingPort {
    calls: Vec<PortCall>,
    next_handle: u32,
    live_views: Vec<u32>,
    groups: BTreeMap<u32, Vec<RecordedMarker>>,
}

impl RecordingPort {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call, in order.
    pub fn calls(&self) -> &[PortCall] {
        &self.calls
    }

    /// Number of `create_view` calls so far.
    pub fn views_created(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, PortCall::CreateView { .. }))
            .count()
    }

    /// Number of `remove_view` calls so far.
    pub fn views_removed(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, PortCall::RemoveView { .. }))
            .count()
    }

    /// Handles of views created and not yet removed.
    pub fn live_views(&self) -> &[u32] {
        &self.live_views
    }

    /// Markers currently held by `group`, in insertion order.
    pub fn markers_in(&self, group: u32) -> &[RecordedMarker] {
        self.groups.get(&group).map_or(&[][..], Vec::as_slice)
    }

    /// Total markers across all live groups.
    pub fn marker_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Forget recorded calls while keeping live state.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn allocate(&mut self) -> u32 {
        self.next_handle = self.next_handle.saturating_add(1);
        self.next_handle
    }
}

impl MapPort for RecordingPort {
    type Container = str;
    type Map = u32;
    type Group = u32;

    fn create_view(
        &mut self,
        container: &str,
        center: Coordinates,
        zoom: u8,
        _zoom_control: bool,
    ) -> u32 {
        let map = self.allocate();
        self.live_views.push(map);
        self.calls.push(PortCall::CreateView {
            container: String::from(container),
            center,
            zoom,
            map,
        });
        map
    }

    fn attach_tile_layer(&mut self, map: &u32, tiles: &TileLayer) {
        self.calls.push(PortCall::AttachTileLayer {
            map: *map,
            url_template: tiles.url_template.clone(),
        });
    }

    fn create_marker_group(&mut self, map: &u32) -> u32 {
        let group = self.allocate();
        self.groups.insert(group, Vec::new());
        self.calls.push(PortCall::CreateMarkerGroup { map: *map, group });
        group
    }

    fn clear_group(&mut self, group: &u32) {
        if let Some(markers) = self.groups.get_mut(group) {
            markers.clear();
        }
        self.calls.push(PortCall::ClearGroup { group: *group });
    }

    fn add_marker(&mut self, group: &u32, at: Coordinates, _icon: &IconSpec, popup_html: &str) {
        self.groups.entry(*group).or_default().push(RecordedMarker {
            at,
            popup_html: String::from(popup_html),
        });
        self.calls.push(PortCall::AddMarker {
            group: *group,
            at,
            popup_html: String::from(popup_html),
        });
    }

    fn remove_view(&mut self, map: u32) {
        self.live_views.retain(|&m| m != map);
        // The engine drops every layer attached to the view.
        self.groups.clear();
        self.calls.push(PortCall::RemoveView { map });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_releases_markers() {
        let mut port = RecordingPort::new();
        let map = port.create_view("map", Coordinates::new(0.0, 0.0), 3, true);
        let group = port.create_marker_group(&map);
        let icon = IconSpec::default();
        port.add_marker(&group, Coordinates::new(1.0, 1.0), &icon, "a");
        port.add_marker(&group, Coordinates::new(2.0, 2.0), &icon, "b");
        assert_eq!(port.markers_in(group).len(), 2);

        port.clear_group(&group);
        assert!(port.markers_in(group).is_empty());
        assert_eq!(port.marker_count(), 0);
    }

    #[test]
    fn remove_view_drops_live_state() {
        let mut port = RecordingPort::new();
        let map = port.create_view("map", Coordinates::new(0.0, 0.0), 3, true);
        let group = port.create_marker_group(&map);
        port.add_marker(&group, Coordinates::new(1.0, 1.0), &IconSpec::default(), "a");

        port.remove_view(map);
        assert!(port.live_views().is_empty());
        assert_eq!(port.marker_count(), 0);
        assert_eq!(port.views_created(), 1);
        assert_eq!(port.views_removed(), 1);
    }

    #[test]
    fn handles_are_distinct() {
        let mut port = RecordingPort::new();
        let map = port.create_view("map", Coordinates::new(0.0, 0.0), 3, true);
        let group = port.create_marker_group(&map);
        assert_ne!(map, group);
    }
}
