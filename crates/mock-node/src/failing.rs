//! A node where every operation fails.

use std::path::Path;

use async_trait::async_trait;

use node_core::{BalanceSnapshot, LightningNode, NodeError, NodeEvent};

/// A node whose every operation fails with a backend error.
///
/// Useful for exercising startup-failure and upstream-error paths.
#[derive(Debug, Clone, Default)]
pub struct FailingNode {
    message: String,
}

impl FailingNode {
    pub fn new() -> Self {
        Self::with_message("mock backend failure")
    }

    /// Fail with a custom error message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn backend_error(&self) -> NodeError {
        NodeError::Backend(self.message.clone())
    }
}

#[async_trait]
impl LightningNode for FailingNode {
    async fn start(&self, _data_dir: &Path) -> Result<String, NodeError> {
        Err(NodeError::Startup(self.message.clone()))
    }

    async fn stop(&self) -> Result<(), NodeError> {
        Err(self.backend_error())
    }

    fn is_running(&self) -> bool {
        false
    }

    fn node_id(&self) -> Result<String, NodeError> {
        Err(self.backend_error())
    }

    async fn get_balances(&self) -> Result<BalanceSnapshot, NodeError> {
        Err(self.backend_error())
    }

    async fn generate_invoice(
        &self,
        _amount_sats: u64,
        _description: &str,
    ) -> Result<String, NodeError> {
        Err(self.backend_error())
    }

    async fn get_new_address(&self) -> Result<String, NodeError> {
        Err(self.backend_error())
    }

    async fn process_events(&self) -> Result<Vec<NodeEvent>, NodeError> {
        Err(self.backend_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_start_fails() {
        let node = FailingNode::with_message("no disk");
        let err = node.start(Path::new("./data")).await.unwrap_err();
        assert!(matches!(err, NodeError::Startup(msg) if msg == "no disk"));
    }

    #[tokio::test]
    async fn test_queries_fail() {
        let node = FailingNode::new();
        assert!(node.get_balances().await.is_err());
        assert!(node.generate_invoice(1, "x").await.is_err());
        assert!(node.get_new_address().await.is_err());
        assert!(node.process_events().await.is_err());
    }
}
