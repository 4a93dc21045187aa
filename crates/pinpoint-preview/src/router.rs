//! Axum router construction for the preview server.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the preview server.
///
/// The router includes:
/// - `GET /` -- host page
/// - `GET /widget` -- widget region fragment
/// - `GET /api/events` -- visible events
/// - `GET /api/filters` -- quick-filter vocabulary
///
/// CORS allows any origin so the marketing site can fetch the fragment
/// from a different host.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/widget", get(handlers::widget))
        .route("/api/events", get(handlers::list_events))
        .route("/api/filters", get(handlers::list_filters))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
