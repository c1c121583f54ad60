//! LDK-backed [`LightningNode`] implementation.
//!
//! Wraps [`ldk_node`] with a mainnet Esplora chain source. Enabled with
//! the `ldk` feature; the rest of the workspace only sees the trait.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use ldk_node::lightning_invoice::{Bolt11InvoiceDescription, Description};
use ldk_node::{Builder, Event, Node};
use tracing::info;

use crate::error::NodeError;
use crate::trait_def::LightningNode;
use crate::types::{BalanceSnapshot, NodeEvent};

const ESPLORA_URL: &str = "https://blockstream.info/api/";
const INVOICE_EXPIRY_SECS: u32 = 3600;

/// A mainnet LDK node behind the [`LightningNode`] trait.
///
/// The inner node is built lazily by [`start`](LightningNode::start);
/// until then every query reports [`NodeError::NotRunning`].
#[derive(Default)]
pub struct LdkNode {
    inner: RwLock<Option<Arc<Node>>>,
}

impl LdkNode {
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&self) -> Option<Arc<Node>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn running_node(&self) -> Result<Arc<Node>, NodeError> {
        self.node().ok_or(NodeError::NotRunning)
    }
}

#[async_trait::async_trait]
impl LightningNode for LdkNode {
    async fn start(&self, data_dir: &Path) -> Result<String, NodeError> {
        let storage_dir = data_dir.to_string_lossy().into_owned();

        // Building and starting the node does blocking disk and network
        // IO, so keep it off the async runtime.
        let node = tokio::task::spawn_blocking(move || {
            let mut builder = Builder::new();
            builder.set_network(ldk_node::bitcoin::Network::Bitcoin);
            builder.set_chain_source_esplora(ESPLORA_URL.to_string(), None);
            builder.set_storage_dir_path(storage_dir);

            let node = Arc::new(
                builder
                    .build()
                    .map_err(|e| NodeError::Startup(format!("build failed: {e}")))?,
            );
            node.start()
                .map_err(|e| NodeError::Startup(format!("start failed: {e}")))?;
            Ok::<_, NodeError>(node)
        })
        .await
        .map_err(|e| NodeError::Startup(format!("start task failed: {e}")))??;

        let node_id = node.node_id().to_string();
        info!(%node_id, "LDK node started");

        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(node);
        Ok(node_id)
    }

    async fn stop(&self) -> Result<(), NodeError> {
        let Some(node) = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        else {
            return Ok(());
        };

        tokio::task::spawn_blocking(move || {
            node.stop()
                .map_err(|e| NodeError::Backend(format!("stop failed: {e}")))
        })
        .await
        .map_err(|e| NodeError::Backend(format!("stop task failed: {e}")))?
    }

    fn is_running(&self) -> bool {
        self.node().is_some()
    }

    fn node_id(&self) -> Result<String, NodeError> {
        Ok(self.running_node()?.node_id().to_string())
    }

    async fn get_balances(&self) -> Result<BalanceSnapshot, NodeError> {
        let balances = self.running_node()?.list_balances();
        Ok(BalanceSnapshot {
            onchain_sats: balances.total_onchain_balance_sats,
            lightning_sats: balances.total_lightning_balance_sats,
        })
    }

    async fn generate_invoice(
        &self,
        amount_sats: u64,
        description: &str,
    ) -> Result<String, NodeError> {
        let node = self.running_node()?;

        let amount_msats = amount_sats
            .checked_mul(1000)
            .ok_or_else(|| NodeError::Backend("invoice amount overflows msats".to_string()))?;
        let description = Description::new(description.to_string())
            .map_err(|e| NodeError::Backend(format!("invalid description: {e}")))?;

        let invoice = node
            .bolt11_payment()
            .receive(
                amount_msats,
                &Bolt11InvoiceDescription::Direct(description),
                INVOICE_EXPIRY_SECS,
            )
            .map_err(|e| NodeError::Backend(format!("invoice generation failed: {e}")))?;

        Ok(invoice.to_string())
    }

    async fn get_new_address(&self) -> Result<String, NodeError> {
        let address = self
            .running_node()?
            .onchain_payment()
            .new_address()
            .map_err(|e| NodeError::Backend(format!("address generation failed: {e}")))?;
        Ok(address.to_string())
    }

    async fn process_events(&self) -> Result<Vec<NodeEvent>, NodeError> {
        let node = self.running_node()?;

        let mut events = Vec::new();
        while let Some(event) = node.next_event() {
            let text = match event {
                Event::ChannelReady { channel_id, .. } => {
                    format!("Channel ready: {channel_id}")
                }
                Event::PaymentReceived { amount_msat, .. } => {
                    format!("Payment received: {amount_msat} msats")
                }
                Event::PaymentSuccessful { payment_hash, .. } => {
                    format!("Payment successful: {payment_hash}")
                }
                other => format!("Other event: {other:?}"),
            };
            events.push(NodeEvent::text(text));
            let _ = node.event_handled();
        }

        Ok(events)
    }
}
