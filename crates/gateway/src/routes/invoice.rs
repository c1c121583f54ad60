//! Invoice creation endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{GatewayError, Result};
use crate::state::AppState;

const DEFAULT_DESCRIPTION: &str = "Payment";

/// Request body for `POST /invoice`.
#[derive(Debug, Deserialize)]
pub struct InvoiceRequest {
    /// Amount to request, in satoshis. Must be positive.
    pub amount_sats: i64,
    #[serde(default)]
    pub description: Option<String>,
}

/// A freshly generated BOLT11 invoice.
#[derive(Serialize)]
pub struct InvoiceResponse {
    pub invoice: String,
}

/// Generate a Lightning invoice.
///
/// Validation happens before readiness is checked and before any node
/// call: a missing or mistyped body is a 422, a non-positive amount a
/// 400, and neither ever reaches the node.
pub async fn create_invoice(
    State(state): State<AppState>,
    payload: std::result::Result<Json<InvoiceRequest>, JsonRejection>,
) -> Result<Json<InvoiceResponse>> {
    let Json(request) = payload?;

    if request.amount_sats <= 0 {
        return Err(GatewayError::Validation(format!(
            "amount_sats must be positive, got {}",
            request.amount_sats
        )));
    }
    let amount_sats = request.amount_sats as u64;

    // Absent and empty descriptions are equivalent.
    let description = match request.description.as_deref() {
        None | Some("") => DEFAULT_DESCRIPTION,
        Some(description) => description,
    };

    let node = state.manager.access().await?;
    let invoice = node.generate_invoice(amount_sats, description).await?;

    info!(amount_sats, "Invoice generated");
    Ok(Json(InvoiceResponse { invoice }))
}
