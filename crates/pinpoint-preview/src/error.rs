//! Error types for the preview server.
//!
//! [`PreviewError`] unifies rendering failures into a single enum that
//! converts into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pinpoint_core::WidgetError;

/// Errors that can occur while serving the preview.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// A template failed to compile or render.
    #[error("template error: {0}")]
    Template(String),

    /// The widget rejected an operation.
    #[error("widget error: {0}")]
    Widget(#[from] WidgetError),

    /// A serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for PreviewError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        tracing::error!(error = %self, "Preview request failed");

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
