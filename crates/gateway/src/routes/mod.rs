//! Route handlers for the gateway.

pub mod events;
pub mod funds;
pub mod invoice;
pub mod status;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(status::status))
        .route("/invoice", post(invoice::create_invoice))
        .route("/address", get(funds::get_address))
        .route("/balances", get(funds::get_balances))
        .route("/events", get(events::get_events))
}
