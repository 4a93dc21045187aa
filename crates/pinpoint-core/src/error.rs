//! Error types for the map widget.

/// Errors returned by [`MapWidget`](crate::widget::MapWidget) operations.
///
/// The error taxonomy is deliberately narrow. A missing container and a
/// repeated mount are reported as [`MountOutcome`](crate::widget::MountOutcome)
/// variants, not errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// The widget has been unmounted and its map view released.
    #[error("map widget has been disposed")]
    Disposed,
}
