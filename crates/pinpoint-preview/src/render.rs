//! HTML rendering of the widget region via `minijinja`.
//!
//! Templates are compiled into the binary. [`build_region`] runs a
//! [`MapWidget`] against a [`LeafletScript`] for one request and collects
//! what the template needs; [`PreviewRenderer`] turns that into HTML.

use minijinja::{AutoEscape, Environment, context};
use pinpoint_core::{EventCatalog, FilterState, MapSettings, MapWidget};
use serde::Serialize;

use crate::error::PreviewError;
use crate::leaflet::LeafletScript;

const WIDGET_TEMPLATE: &str = include_str!("../templates/widget.html.j2");
const PAGE_TEMPLATE: &str = include_str!("../templates/page.html.j2");

/// Page title shown on the host page.
pub const PAGE_TITLE: &str = "Pinpoint";

/// A chip as drawn in the region, with the link that toggles it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipLink {
    /// Filter key.
    pub key: String,
    /// Button caption.
    pub label: String,
    /// Whether the key is active.
    pub active: bool,
    /// Query string selecting the filter set with this key toggled.
    pub href: String,
}

/// Everything needed to render the widget region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetRegion {
    /// Quick-filter chips.
    pub chips: Vec<ChipLink>,
    /// Number of visible events.
    pub visible_count: usize,
    /// "Showing N events".
    pub count_label: String,
    /// Map element id.
    pub container_id: String,
    /// Leaflet script for the map element.
    pub script: String,
}

/// Query string for `filters`, e.g. `?filters=free,outdoors`, or `?` when empty.
pub fn filters_href(filters: &FilterState) -> String {
    if filters.is_empty() {
        return String::from("?");
    }
    let keys: Vec<&str> = filters.iter().map(|k| k.as_str()).collect();
    format!("?filters={}", keys.join(","))
}

/// Run the widget for `filters` and capture the resulting region.
///
/// Each key is toggled before mount, so the single synchronization done
/// by `mount` already reflects the full filter set.
///
/// # Errors
///
/// Returns [`PreviewError::Widget`] if the widget rejects an operation.
pub fn build_region(
    catalog: &EventCatalog,
    settings: &MapSettings,
    filters: &FilterState,
) -> Result<WidgetRegion, PreviewError> {
    let mut script = LeafletScript::new();
    let controls = {
        let mut widget = MapWidget::new(&mut script, catalog, settings);
        for key in filters.iter() {
            widget.toggle(key.clone())?;
        }
        widget.mount(Some(settings.container_id.as_str()))?;
        widget.controls()
    };

    let chips = controls
        .chips
        .iter()
        .map(|chip| ChipLink {
            key: chip.key.to_string(),
            label: chip.label.clone(),
            active: chip.active,
            href: filters_href(&filters.toggled(&chip.key)),
        })
        .collect();

    Ok(WidgetRegion {
        chips,
        visible_count: controls.visible_count,
        count_label: controls.count_label(),
        container_id: settings.container_id.clone(),
        script: script.render(&settings.container_id),
    })
}

/// Template environment for the preview.
pub struct PreviewRenderer {
    env: Environment<'static>,
}

impl PreviewRenderer {
    /// Compile the embedded templates.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::Template`] if a template fails to parse.
    pub fn new() -> Result<Self, PreviewError> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_template("widget.html", WIDGET_TEMPLATE)
            .map_err(|e| PreviewError::Template(format!("failed to add widget template: {e}")))?;
        env.add_template("page.html", PAGE_TEMPLATE)
            .map_err(|e| PreviewError::Template(format!("failed to add page template: {e}")))?;
        Ok(Self { env })
    }

    /// Render the widget region fragment.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::Template`] if rendering fails.
    pub fn render_widget(&self, region: &WidgetRegion) -> Result<String, PreviewError> {
        self.env
            .get_template("widget.html")
            .map_err(|e| PreviewError::Template(format!("missing widget template: {e}")))?
            .render(region)
            .map_err(|e| PreviewError::Template(format!("widget render failed: {e}")))
    }

    /// Render the host page with the region embedded.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::Template`] if rendering fails.
    pub fn render_page(&self, region: &WidgetRegion) -> Result<String, PreviewError> {
        let widget = self.render_widget(region)?;
        self.env
            .get_template("page.html")
            .map_err(|e| PreviewError::Template(format!("missing page template: {e}")))?
            .render(context! { title => PAGE_TITLE, widget => widget })
            .map_err(|e| PreviewError::Template(format!("page render failed: {e}")))
    }
}
