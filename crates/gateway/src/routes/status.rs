//! Node status endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use node_core::BalanceSnapshot;
use node_manager::{NodeState, NotReady};

use crate::error::Result;
use crate::state::AppState;

/// Status and basic node info.
#[derive(Serialize)]
pub struct StatusResponse {
    /// Lowercase lifecycle state name.
    pub status: String,
    /// Node identity; `null` unless the node is running.
    pub node_id: Option<String>,
    pub balances: BalanceSnapshot,
}

/// Get node status and basic info.
///
/// Unlike every other endpoint, a node that is not running is reported
/// as a successful degraded response rather than a 503: the service is
/// reachable, the node just is not ready.
pub async fn status(State(state): State<AppState>) -> Result<Json<StatusResponse>> {
    match state.manager.access().await {
        Ok(node) => {
            let node_id = node.node_id()?;
            let balances = node.get_balances().await?;
            Ok(Json(StatusResponse {
                status: NodeState::Running.as_str().to_string(),
                node_id: Some(node_id),
                balances,
            }))
        }
        Err(NotReady(current)) => Ok(Json(StatusResponse {
            status: current.as_str().to_string(),
            node_id: None,
            balances: BalanceSnapshot::default(),
        })),
    }
}
