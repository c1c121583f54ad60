//! On-chain address and balance endpoints.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;

/// A fresh on-chain address.
#[derive(Serialize)]
pub struct AddressResponse {
    pub address: String,
}

/// Balance breakdown with an exact total.
#[derive(Serialize)]
pub struct BalancesResponse {
    pub onchain_sats: u64,
    pub lightning_sats: u64,
    /// `onchain_sats + lightning_sats`, widened so the sum is exact
    /// for any pair of inputs.
    pub total_sats: u128,
}

/// Get a new on-chain Bitcoin address.
pub async fn get_address(State(state): State<AppState>) -> Result<Json<AddressResponse>> {
    let node = state.manager.access().await?;
    let address = node.get_new_address().await?;
    Ok(Json(AddressResponse { address }))
}

/// Get node balances.
pub async fn get_balances(State(state): State<AppState>) -> Result<Json<BalancesResponse>> {
    let node = state.manager.access().await?;
    let balances = node.get_balances().await?;
    Ok(Json(BalancesResponse {
        onchain_sats: balances.onchain_sats,
        lightning_sats: balances.lightning_sats,
        total_sats: balances.total_sats(),
    }))
}
