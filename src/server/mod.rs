//! HTTP server for the recipe API
//!
//! Routes `/api/recipes` onto a shared [`RecipeStore`].

pub mod handlers;
pub mod routes;

pub use routes::create_router;

use crate::config::ServerConfig;
use crate::error::Result;
use crate::store::RecipeStore;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared handler state
pub type AppState = Arc<RecipeStore>;

/// Bind the configured address and serve until the process is interrupted.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let addr = config.socket_addr()?;
    info!("Starting recipeshare server on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    let store = Arc::new(RecipeStore::new());
    serve(listener, store, &config, shutdown_signal()).await
}

/// Serve the recipe API on an already-bound listener.
///
/// Returns once `shutdown` resolves and in-flight requests have finished.
pub async fn serve<F>(
    listener: TcpListener,
    store: AppState,
    config: &ServerConfig,
    shutdown: F,
) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let local_addr: SocketAddr = listener.local_addr()?;
    let app = create_router(store, config.cors_permissive);

    info!("Listening on http://{}", local_addr);
    info!("  GET    /api/recipes");
    info!("  POST   /api/recipes");
    info!("  GET    /api/recipes/:id");
    info!("  PUT    /api/recipes/:id");
    info!("  PATCH  /api/recipes/:id");
    info!("  DELETE /api/recipes/:id");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, keep serving.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
