//! Contact service binary
//!
//! Serves `/api/contact` over HTTP with an in-memory store constructed at
//! startup. Messages live only as long as the process.

use contact_api::router;
use contact_store::MessageStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_ADDR: &str = "127.0.0.1:3001";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr: SocketAddr = std::env::var("CONTACT_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    let store = Arc::new(MessageStore::new());
    let app = router(store);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("contact service listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
