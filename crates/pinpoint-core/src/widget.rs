//! The map preview widget.
//!
//! [`MapWidget`] is the owned state record behind the embedded map: the
//! active [`FilterState`], the view lifecycle, and a borrowed [`MapPort`].
//! The host drives it through three lifecycle calls (`mount`, `toggle`,
//! `unmount`) and reads [`MapWidget::controls`] to draw the chip row.
//!
//! The widget is single-threaded. Each toggle runs exactly one
//! synchronization pass before returning, so after any sequence of toggles
//! the marker group reflects the last applied filter set.

use pinpoint_types::{Event, FilterKey, QuickFilter, quick_filters};
use tracing::debug;

use crate::catalog::EventCatalog;
use crate::config::MapSettings;
use crate::control::ControlSurface;
use crate::error::WidgetError;
use crate::filter::{FilterState, filter};
use crate::port::MapPort;
use crate::sync::sync_markers;
use crate::view::{Lifecycle, ViewState};

/// Result of a [`MapWidget::mount`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    /// The view was created and populated with `markers` pins.
    Initialized {
        /// Markers placed by the initial synchronization.
        markers: usize,
    },
    /// A view already exists; nothing was done.
    AlreadyInitialized,
    /// No rendering surface yet; retry on a later render.
    ContainerUnavailable,
}

/// Result of a [`MapWidget::toggle`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The marker group was rebuilt with `markers` pins.
    Synced {
        /// Markers now on the map.
        markers: usize,
    },
    /// No view yet; the new filter set is applied on mount.
    Deferred,
}

/// Map preview widget over a [`MapPort`].
///
/// Dropping a mounted widget releases its view, so teardown happens on
/// every exit path even if [`unmount`](Self::unmount) is never called.
pub struct MapWidget<'a, P: MapPort> {
    port: &'a mut P,
    catalog: &'a EventCatalog,
    settings: &'a MapSettings,
    vocabulary: Vec<QuickFilter>,
    filters: FilterState,
    view: ViewState<P::Map, P::Group>,
}

impl<'a, P: MapPort> MapWidget<'a, P> {
    /// Create an unmounted widget with no active filters.
    pub fn new(port: &'a mut P, catalog: &'a EventCatalog, settings: &'a MapSettings) -> Self {
        Self {
            port,
            catalog,
            settings,
            vocabulary: quick_filters(),
            filters: FilterState::new(),
            view: ViewState::default(),
        }
    }

    /// Current lifecycle phase.
    pub const fn lifecycle(&self) -> Lifecycle {
        self.view.lifecycle()
    }

    /// The active filter set.
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Events that pass the active filters, in catalog order.
    pub fn visible(&self) -> Vec<&'a Event> {
        filter(self.catalog.events(), &self.filters)
    }

    /// Number of events that pass the active filters.
    pub fn visible_count(&self) -> usize {
        self.visible().len()
    }

    /// Chip row and count for the current filter set.
    pub fn controls(&self) -> ControlSurface {
        ControlSurface::new(&self.vocabulary, &self.filters, self.visible_count())
    }

    /// Create the map view on first call with a container.
    ///
    /// A `None` container means the surface is not rendered yet; the call is
    /// a no-op and the host retries on its next render. Once initialized,
    /// further calls do nothing. Initialization attaches tiles, creates the
    /// marker group, and synchronizes markers with the current filters.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Disposed`] after [`unmount`](Self::unmount).
    pub fn mount(&mut self, container: Option<&P::Container>) -> Result<MountOutcome, WidgetError> {
        match self.view.lifecycle() {
            Lifecycle::Disposed => return Err(WidgetError::Disposed),
            Lifecycle::Initialized => return Ok(MountOutcome::AlreadyInitialized),
            Lifecycle::Uninitialized => {}
        }
        let Some(container) = container else {
            debug!("Map container not available, deferring initialization");
            return Ok(MountOutcome::ContainerUnavailable);
        };

        let settings = self.settings;
        let map = self.port.create_view(
            container,
            settings.center,
            settings.zoom,
            settings.zoom_control,
        );
        self.port.attach_tile_layer(&map, &settings.tiles);
        let group = self.port.create_marker_group(&map);
        self.view.initialize(map, group);
        debug!(zoom = settings.zoom, "Map view initialized");

        let markers = self.synchronize().unwrap_or(0);
        Ok(MountOutcome::Initialized { markers })
    }

    /// Toggle `key` and resynchronize the markers.
    ///
    /// Before mount the filter set still changes, and the markers catch up
    /// when the view is created.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Disposed`] after [`unmount`](Self::unmount).
    pub fn toggle(&mut self, key: FilterKey) -> Result<SyncOutcome, WidgetError> {
        if self.view.lifecycle() == Lifecycle::Disposed {
            return Err(WidgetError::Disposed);
        }
        let active = self.filters.toggle(key);
        debug!(active, filters = self.filters.len(), "Filter toggled");
        Ok(self
            .synchronize()
            .map_or(SyncOutcome::Deferred, |markers| SyncOutcome::Synced { markers }))
    }

    /// Release the map view and enter the terminal `Disposed` phase.
    ///
    /// Returns `true` if a live view was released. Safe to call repeatedly.
    pub fn unmount(&mut self) -> bool {
        let released = self.view.dispose();
        let had_view = released.is_some();
        if let Some(map) = released {
            self.port.remove_view(map);
            debug!("Map view disposed");
        }
        had_view
    }

    /// Rebuild the marker group, if there is one.
    fn synchronize(&mut self) -> Option<usize> {
        let group = self.view.group()?;
        let visible = filter(self.catalog.events(), &self.filters);
        Some(sync_markers(
            &mut *self.port,
            group,
            &visible,
            &self.settings.icon,
        ))
    }
}

impl<P: MapPort> Drop for MapWidget<'_, P> {
    fn drop(&mut self) {
        self.unmount();
    }
}
