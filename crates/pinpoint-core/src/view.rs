//! Map view lifecycle.
//!
//! ```text
//! Uninitialized --initialize--> Initialized --dispose--> Disposed
//!       \__________________________dispose_____________/
//! ```
//!
//! No other transitions exist. `initialize` fires at most once per widget,
//! no matter how often the host re-renders. `dispose` hands the map handle
//! back exactly once so the caller can release it.

use serde::Serialize;

/// The lifecycle phase, without the handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    /// No view exists yet.
    Uninitialized,
    /// The view, tiles, and marker group exist.
    Initialized,
    /// The view has been released. Terminal.
    Disposed,
}

/// Lifecycle state holding the engine handles while the view is live.
#[derive(Debug)]
pub enum ViewState<M, G> {
    /// No view exists yet.
    Uninitialized,
    /// The view is live.
    Initialized {
        /// The map view handle.
        map: M,
        /// The marker group inside the view.
        group: G,
    },
    /// The view has been released.
    Disposed,
}

impl<M, G> Default for ViewState<M, G> {
    fn default() -> Self {
        Self::Uninitialized
    }
}

impl<M, G> ViewState<M, G> {
    /// The current phase.
    pub const fn lifecycle(&self) -> Lifecycle {
        match self {
            Self::Uninitialized => Lifecycle::Uninitialized,
            Self::Initialized { .. } => Lifecycle::Initialized,
            Self::Disposed => Lifecycle::Disposed,
        }
    }

    /// The marker group, if the view is live.
    pub const fn group(&self) -> Option<&G> {
        match self {
            Self::Initialized { group, .. } => Some(group),
            Self::Uninitialized | Self::Disposed => None,
        }
    }

    /// Move from `Uninitialized` to `Initialized`.
    ///
    /// Returns `false` and leaves the state untouched from any other phase.
    pub fn initialize(&mut self, map: M, group: G) -> bool {
        if matches!(self, Self::Uninitialized) {
            *self = Self::Initialized { map, group };
            true
        } else {
            false
        }
    }

    /// Move to `Disposed`, returning the map handle if a view was live.
    ///
    /// Calling this again after disposal returns `None`.
    pub fn dispose(&mut self) -> Option<M> {
        match core::mem::replace(self, Self::Disposed) {
            Self::Initialized { map, .. } => Some(map),
            Self::Uninitialized | Self::Disposed => None,
        }
    }
}
