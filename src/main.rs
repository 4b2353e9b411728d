use book_gateway::api::router::build_router;
use book_gateway::config::Config;
use book_gateway::index::elastic::ElasticIndex;
use book_gateway::index::store::{BookIndex, SharedIndex};
use book_gateway::sample::classics;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1. Configuration:
    let config = Config::load()?;
    let http_addr: SocketAddr = config.http_server_address.parse()?;
    tracing::info!("Search backend at {}", config.elasticsearch_server_address);

    // 2. Search backend:
    let elastic = ElasticIndex::new(&config.elasticsearch_server_address)?
        .with_refresh_on_write(config.refresh_on_write);

    if let Err(e) = elastic.ensure_index().await {
        tracing::warn!("Could not ensure index exists: {}", e);
    }

    if config.seed_sample_data {
        let books = classics();
        for book in &books {
            elastic.upsert(book).await?;
        }
        tracing::info!("Seeded {} sample books", books.len());
    }

    let index: SharedIndex = Arc::new(elastic);

    // 3. HTTP Router:
    let app = build_router(index);

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", http_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(http_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}
