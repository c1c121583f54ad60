//! The [`LightningNode`] trait definition.

use std::path::Path;

use async_trait::async_trait;

use crate::error::NodeError;
use crate::types::{BalanceSnapshot, NodeEvent};

/// A running Bitcoin/Lightning node, consumed as a black box.
///
/// Query operations are safe to call concurrently; `start` and `stop`
/// are serialized by the lifecycle manager and must never race with
/// each other. Everything except `start`, `stop` and `is_running` is
/// only meaningful while the node is running.
#[async_trait]
pub trait LightningNode: Send + Sync {
    /// Start the node, persisting state under `data_dir`.
    ///
    /// Returns the node's public identity on success.
    async fn start(&self, data_dir: &Path) -> Result<String, NodeError>;

    /// Stop the node. Callers treat failures as best-effort.
    async fn stop(&self) -> Result<(), NodeError>;

    /// Whether the node is currently running.
    fn is_running(&self) -> bool;

    /// The node's public identity. Valid only while running.
    fn node_id(&self) -> Result<String, NodeError>;

    /// Current on-chain and Lightning balances.
    async fn get_balances(&self) -> Result<BalanceSnapshot, NodeError>;

    /// Generate a BOLT11 invoice for `amount_sats`.
    async fn generate_invoice(
        &self,
        amount_sats: u64,
        description: &str,
    ) -> Result<String, NodeError>;

    /// Generate a fresh on-chain address. Addresses are never reused.
    async fn get_new_address(&self) -> Result<String, NodeError>;

    /// Drain and return the events accumulated since the last call.
    async fn process_events(&self) -> Result<Vec<NodeEvent>, NodeError>;
}
