//! HTTP gateway exposing a single Lightning node.
//!
//! Each request validates its input, acquires the node through the
//! lifecycle manager's `access()` gate, performs exactly one node
//! operation and maps the outcome onto the external status-code
//! contract. Readiness policy lives entirely in `node-manager`; the
//! gateway only translates it.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use error::GatewayError;
pub use state::AppState;

use axum::Router;

/// Build the gateway application for the given state.
pub fn app(state: AppState) -> Router {
    routes::router().with_state(state)
}
