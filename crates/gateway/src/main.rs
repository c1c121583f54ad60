//! Gateway binary: starts the node, serves HTTP, stops the node on
//! shutdown.

use std::sync::Arc;

use tracing::{info, warn};

use gateway::config::Config;
use gateway::AppState;
use node_core::LightningNode;
use node_manager::NodeManager;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let manager = Arc::new(NodeManager::new(build_node()));

    // The node must be fully up before the listener opens; a startup
    // failure aborts the process without serving.
    let node_id = manager.start(&config.data_dir).await?;
    info!(%node_id, "Lightning node ready");

    let state = AppState::new(Arc::clone(&manager));
    let app = gateway::app(state);

    info!(addr = %config.addr, "Gateway listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Best-effort; stop errors are logged inside the manager.
    manager.stop().await;

    Ok(())
}

fn build_node() -> Arc<dyn LightningNode> {
    #[cfg(feature = "ldk")]
    {
        Arc::new(node_core::ldk::LdkNode::new())
    }
    #[cfg(not(feature = "ldk"))]
    {
        warn!("Built without the `ldk` feature; serving an in-memory mock node");
        Arc::new(mock_node::MockNode::new())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
    }
}
