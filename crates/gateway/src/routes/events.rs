//! Node event endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use node_core::NodeEvent;

use crate::error::Result;
use crate::state::AppState;

/// Events accumulated since the previous call, forwarded verbatim.
#[derive(Serialize)]
pub struct EventsResponse {
    pub events: Vec<NodeEvent>,
}

/// Process and return recent node events.
pub async fn get_events(State(state): State<AppState>) -> Result<Json<EventsResponse>> {
    let node = state.manager.access().await?;
    let events = node.process_events().await?;
    Ok(Json(EventsResponse { events }))
}
