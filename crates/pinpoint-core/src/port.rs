//! The map-engine capability the widget depends on.
//!
//! The widget never talks to a concrete map library. Instead it drives a
//! [`MapPort`], and a thin adapter outside this crate translates each call
//! to the real engine. Tests use [`RecordingPort`](crate::recording::RecordingPort).

use pinpoint_types::{Coordinates, IconSpec, TileLayer};

/// Operations the widget requires from a map-rendering engine.
///
/// Handles are opaque to the widget. The widget owns the map handle for
/// its whole lifetime and is the only writer to the marker group.
pub trait MapPort {
    /// The rendering surface a view is attached to (e.g. an element id).
    type Container: ?Sized;
    /// Handle to an initialized map view.
    type Map;
    /// Handle to a removable group of markers inside a view.
    type Group;

    /// Create a map view in `container`, centred on `center` at `zoom`.
    ///
    /// `zoom_control` toggles the engine's zoom buttons. The widget calls
    /// this at most once per instance.
    fn create_view(
        &mut self,
        container: &Self::Container,
        center: Coordinates,
        zoom: u8,
        zoom_control: bool,
    ) -> Self::Map;

    /// Add base imagery to a view. Called once per view.
    fn attach_tile_layer(&mut self, map: &Self::Map, tiles: &TileLayer);

    /// Create an empty marker group and add it to the view.
    fn create_marker_group(&mut self, map: &Self::Map) -> Self::Group;

    /// Remove every marker in the group, releasing its state.
    fn clear_group(&mut self, group: &Self::Group);

    /// Render one pin at `at` with a popup opened on interaction.
    fn add_marker(
        &mut self,
        group: &Self::Group,
        at: Coordinates,
        icon: &IconSpec,
        popup_html: &str,
    );

    /// Tear the view down and release everything the engine holds for it.
    fn remove_view(&mut self, map: Self::Map);
}
