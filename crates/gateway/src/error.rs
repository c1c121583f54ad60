//! Error taxonomy for the HTTP surface.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use node_core::NodeError;
use node_manager::NotReady;

/// Errors a request handler can produce, each with a fixed status code.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Input failed a business rule (e.g. non-positive amount). 400.
    #[error("invalid request: {0}")]
    Validation(String),

    /// Required field absent or body malformed at the transport
    /// boundary. 422.
    #[error("malformed request body: {0}")]
    MissingField(String),

    /// The node is not running; carries the lifecycle state. 503.
    #[error(transparent)]
    NotReady(#[from] NotReady),

    /// The node failed a call that had already passed validation and
    /// readiness checks. 500, message forwarded verbatim.
    #[error("lightning node error: {0}")]
    Upstream(#[from] NodeError),
}

impl From<JsonRejection> for GatewayError {
    fn from(rejection: JsonRejection) -> Self {
        GatewayError::MissingField(rejection.body_text())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::Validation(msg) => {
                tracing::warn!("Rejected request: {}", msg);
                StatusCode::BAD_REQUEST
            }
            GatewayError::MissingField(msg) => {
                tracing::warn!("Malformed request body: {}", msg);
                StatusCode::UNPROCESSABLE_ENTITY
            }
            GatewayError::NotReady(not_ready) => {
                tracing::warn!("Request while {}", not_ready);
                StatusCode::SERVICE_UNAVAILABLE
            }
            GatewayError::Upstream(err) => {
                tracing::error!("Node error: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = serde_json::json!({
            "error": self.to_string()
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for gateway handlers.
pub type Result<T> = std::result::Result<T, GatewayError>;
