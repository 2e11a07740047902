use review_analyzer::app::router::build_router;
use review_analyzer::app::state::ReviewService;
use review_analyzer::config::Config;
use review_analyzer::sentiment::VaderAnalyzer;
use review_analyzer::storage::loader::load_reviews;
use review_analyzer::storage::memory::ReviewStore;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Config::load()?;

    // 1. Bulk load:
    let reviews = load_reviews(&config.data_path)?;
    tracing::info!(
        "Loaded {} reviews from {}",
        reviews.len(),
        config.data_path.display()
    );

    // 2. Service (store + scorer):
    let service = ReviewService::new(
        ReviewStore::from_reviews(reviews),
        Arc::new(VaderAnalyzer::new()),
    );

    // 3. HTTP Router:
    let app = build_router(service);

    // 4. Start HTTP server:
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on port {}...", config.port);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
