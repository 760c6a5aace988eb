//! Portfolio Site - Rust Implementation
//!
//! Server build: SSR + JSON API on the configured address.
//! Web build: hydrates the server-rendered page in the browser.

#[cfg(feature = "server")]
use portfolio_site::{config, content, server};

#[cfg(feature = "server")]
use tokio::signal;
#[cfg(feature = "server")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_site=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting portfolio site v{} ({})",
        server::VERSION,
        server::GIT_SHA
    );

    let config = config::load_config()?;
    tracing::info!("Configuration loaded, port: {}", config.port);

    // Fail fast on a broken content document rather than serving error pages
    let portfolio = content::embedded()?;
    tracing::info!(
        "Content loaded: {} projects, {} skill categories",
        portfolio.projects.len(),
        portfolio.skills.len()
    );

    let addr = config.listen_addr();
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, server::router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(portfolio_site::app::App);
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
#[cfg(feature = "server")]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
