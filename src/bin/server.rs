//! Document Q&A server binary
//!
//! Run with: cargo run --bin docqa-server

use docqa::{config::RagConfig, server::RagServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docqa=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RagConfig::from_env()?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Embedding model: {}", config.embeddings.model);
    tracing::info!("  - LLM model: {}", config.llm.model);
    tracing::info!("  - Upload dir: {}", config.storage.upload_dir.display());
    tracing::info!("  - Index dir: {}", config.storage.index_dir.display());

    let server = RagServer::new(config)?;

    println!("Document Q&A server starting on http://{}", server.address());
    println!("Endpoints:");
    println!("  POST /upload  - Upload a PDF or text document");
    println!("  POST /ask     - Ask a question about indexed documents");
    println!("  POST /rewrite - Restyle an existing answer");
    println!("  GET  /health  - Health check");

    server.start().await?;

    Ok(())
}
