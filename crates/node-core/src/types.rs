//! Data types surfaced by a node backend.

use serde::{Deserialize, Serialize};

/// On-chain and Lightning balances at a single point in time.
///
/// Derived on demand from the node; never cached across requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    /// Funds held in the base blockchain ledger, in satoshis.
    pub onchain_sats: u64,
    /// Funds held in off-chain payment channels, in satoshis.
    pub lightning_sats: u64,
}

impl BalanceSnapshot {
    /// Sum of both balances, widened so the addition is always exact.
    pub fn total_sats(&self) -> u128 {
        u128::from(self.onchain_sats) + u128::from(self.lightning_sats)
    }
}

/// An opaque event emitted by the node (payment received, channel
/// update, ...). Forwarded to callers verbatim, never interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeEvent(pub serde_json::Value);

impl NodeEvent {
    /// Wrap a human-readable event description.
    pub fn text(message: impl Into<String>) -> Self {
        NodeEvent(serde_json::Value::String(message.into()))
    }
}
