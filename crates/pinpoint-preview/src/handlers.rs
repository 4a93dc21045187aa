//! HTTP endpoint handlers for the preview server.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Host page embedding the widget region |
//! | `GET` | `/widget` | Widget region fragment |
//! | `GET` | `/api/events` | Visible events and count as JSON |
//! | `GET` | `/api/filters` | Quick-filter vocabulary |
//!
//! Every endpoint accepts `?filters=free,outdoors`.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use pinpoint_core::{FilterState, filter};
use pinpoint_types::{FilterKey, quick_filters};

use crate::error::PreviewError;
use crate::render::build_region;
use crate::state::AppState;

/// Query parameters shared by all endpoints.
#[derive(Debug, Default, serde::Deserialize)]
pub struct FilterQuery {
    /// Comma-separated filter keys.
    pub filters: Option<String>,
}

impl FilterQuery {
    /// The filter set named by the query.
    pub fn filter_state(&self) -> FilterState {
        self.filters.as_deref().map(parse_filters).unwrap_or_default()
    }
}

/// Parse `free, outdoors,,indoor` into a filter set.
///
/// Segments are trimmed but otherwise kept exact; empty segments are
/// skipped and duplicates collapse.
pub fn parse_filters(raw: &str) -> FilterState {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(FilterKey::new)
        .collect()
}

// ---------------------------------------------------------------------------
// GET / and GET /widget
// ---------------------------------------------------------------------------

/// Serve the host page.
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<Html<String>, PreviewError> {
    let region = build_region(&state.catalog, &state.settings, &query.filter_state())?;
    Ok(Html(state.renderer.render_page(&region)?))
}

/// Serve only the widget region, for hosts that place it themselves.
pub async fn widget(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<Html<String>, PreviewError> {
    let region = build_region(&state.catalog, &state.settings, &query.filter_state())?;
    Ok(Html(state.renderer.render_widget(&region)?))
}

// ---------------------------------------------------------------------------
// GET /api/events
// ---------------------------------------------------------------------------

/// List the events visible under the requested filters.
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<impl IntoResponse, PreviewError> {
    let filters = query.filter_state();
    let visible = filter(state.catalog.events(), &filters);
    let keys: Vec<&str> = filters.iter().map(FilterKey::as_str).collect();

    Ok(Json(serde_json::json!({
        "filters": keys,
        "count": visible.len(),
        "events": serde_json::to_value(&visible)?,
    })))
}

// ---------------------------------------------------------------------------
// GET /api/filters
// ---------------------------------------------------------------------------

/// List the quick-filter vocabulary.
pub async fn list_filters() -> impl IntoResponse {
    Json(quick_filters())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_skips_empty() {
        let state = parse_filters(" free,, outdoors ,");
        let keys: Vec<&str> = state.iter().map(FilterKey::as_str).collect();
        assert_eq!(keys, vec!["free", "outdoors"]);
    }

    #[test]
    fn parse_keeps_case() {
        let state = parse_filters("FREE,Outdoors");
        assert!(!state.is_active(&FilterKey::free()));
        assert!(state.is_active(&FilterKey::new("Outdoors")));
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(parse_filters("free,free, free").len(), 1);
    }

    #[test]
    fn missing_query_is_empty() {
        assert!(FilterQuery::default().filter_state().is_empty());
    }
}
