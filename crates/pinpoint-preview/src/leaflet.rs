//! [`MapPort`] adapter that drives Leaflet by emitting JavaScript.
//!
//! The preview is server-rendered, so instead of calling Leaflet directly
//! the adapter records each port call as a JavaScript statement. The
//! statements run in the browser inside one closure. Teardown statements
//! (from [`MapPort::remove_view`]) are kept apart and run on a `pagehide`
//! that discards the page. A page parked in the back/forward cache keeps
//! its map, since restoring it does not re-run the setup closure.
//!
//! All values reach the script as JSON literals, with `</` escaped so a
//! string can never close the surrounding `<script>` element.

use std::fmt::Write as _;

use pinpoint_core::MapPort;
use pinpoint_types::{Coordinates, IconSpec, TileLayer};
use serde::Serialize;

/// A Leaflet map variable in the generated script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapRef(u32);

/// A Leaflet layer-group variable in the generated script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupRef(u32);

/// Collects Leaflet statements for one widget instance.
#[derive(Debug, Default)]
pub struct LeafletScript {
    setup: Vec<String>,
    teardown: Vec<String>,
    icons: Vec<IconSpec>,
    next_var: u32,
}

impl LeafletScript {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Statements run on page load, in call order.
    pub fn setup(&self) -> &[String] {
        &self.setup
    }

    /// Statements run when the page is discarded.
    pub fn teardown(&self) -> &[String] {
        &self.teardown
    }

    /// The complete script body, ready to place inside `<script>`.
    ///
    /// Setup runs only if the container element exists and carries no
    /// Leaflet map yet, which keeps a re-inserted fragment from stacking a
    /// second view on the same element.
    pub fn render(&self, container_id: &str) -> String {
        let mut out = String::from("(function () {\n");
        let _ = writeln!(
            out,
            "  const el = document.getElementById({});",
            js_literal(container_id)
        );
        out.push_str("  if (!el || el._leaflet_id) return;\n");
        for line in &self.setup {
            let _ = writeln!(out, "  {line}");
        }
        if !self.teardown.is_empty() {
            out.push_str("  window.addEventListener(\"pagehide\", function teardown(event) {\n");
            out.push_str("    if (event.persisted) return;\n");
            out.push_str("    window.removeEventListener(\"pagehide\", teardown);\n");
            for line in &self.teardown {
                let _ = writeln!(out, "    {line}");
            }
            out.push_str("  });\n");
        }
        out.push_str("})();\n");
        out
    }

    fn allocate(&mut self) -> u32 {
        self.next_var = self.next_var.saturating_add(1);
        self.next_var
    }

    /// Variable name for `icon`, declaring it on first use.
    fn icon_var(&mut self, icon: &IconSpec) -> String {
        if let Some(pos) = self.icons.iter().position(|i| i == icon) {
            return format!("icon{pos}");
        }
        let pos = self.icons.len();
        let options = serde_json::json!({
            "iconUrl": icon.url,
            "iconSize": [icon.size.x, icon.size.y],
            "iconAnchor": [icon.anchor.x, icon.anchor.y],
            "popupAnchor": [icon.popup_anchor.x, icon.popup_anchor.y],
        });
        self.setup
            .push(format!("const icon{pos} = L.icon({});", js_literal(&options)));
        self.icons.push(icon.clone());
        format!("icon{pos}")
    }
}

impl MapPort for LeafletScript {
    type Container = str;
    type Map = MapRef;
    type Group = GroupRef;

    fn create_view(
        &mut self,
        container: &str,
        center: Coordinates,
        zoom: u8,
        zoom_control: bool,
    ) -> MapRef {
        let map = MapRef(self.allocate());
        self.setup.push(format!(
            "const map{} = L.map({}, {{ zoomControl: {zoom_control} }}).setView({}, {zoom});",
            map.0,
            js_literal(container),
            js_latlng(center),
        ));
        map
    }

    fn attach_tile_layer(&mut self, map: &MapRef, tiles: &TileLayer) {
        let options = serde_json::json!({
            "attribution": tiles.attribution,
            "maxZoom": tiles.max_zoom,
        });
        self.setup.push(format!(
            "L.tileLayer({}, {}).addTo(map{});",
            js_literal(&tiles.url_template),
            js_literal(&options),
            map.0
        ));
    }

    fn create_marker_group(&mut self, map: &MapRef) -> GroupRef {
        let group = GroupRef(self.allocate());
        self.setup.push(format!(
            "const group{} = L.layerGroup().addTo(map{});",
            group.0, map.0
        ));
        group
    }

    fn clear_group(&mut self, group: &GroupRef) {
        self.setup.push(format!("group{}.clearLayers();", group.0));
    }

    fn add_marker(
        &mut self,
        group: &GroupRef,
        at: Coordinates,
        icon: &IconSpec,
        popup_html: &str,
    ) {
        let icon = self.icon_var(icon);
        self.setup.push(format!(
            "L.marker({}, {{ icon: {icon} }}).bindPopup({}).addTo(group{});",
            js_latlng(at),
            js_literal(popup_html),
            group.0
        ));
    }

    fn remove_view(&mut self, map: MapRef) {
        self.teardown.push(format!("map{}.remove();", map.0));
    }
}

/// Encode `value` as a JavaScript literal safe to embed in `<script>`.
fn js_literal<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value)
        .map_or_else(|_| String::from("null"), |s| s.replace("</", "<\\/"))
}

fn js_latlng(at: Coordinates) -> String {
    js_literal(&[at.lat, at.lng])
}
