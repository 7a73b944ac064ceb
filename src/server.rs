// ABOUTME: HTTP server assembly and lifecycle for the customer API
// ABOUTME: Bootstraps the store, layers tracing and CORS over the routes, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server wiring
//!
//! [`build_router`] is separate from [`run`] so tests can drive the full
//! router, middleware included, without binding a socket.

use crate::{
    config::ServerConfig,
    database::CustomerStore,
    errors::{AppError, AppResult},
    middleware::{propagate_request_id_layer, set_request_id_layer, setup_cors, trace_layer},
    routes::{handle_fallback, CustomerRoutes, HealthRoutes, WelcomeRoutes},
};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Assemble every route and middleware layer
///
/// Layers run outermost first: request id assignment, tracing span, id
/// propagation, then CORS.
pub fn build_router(store: Arc<CustomerStore>, config: &ServerConfig) -> Router {
    Router::new()
        .merge(WelcomeRoutes::routes())
        .merge(HealthRoutes::routes())
        .merge(CustomerRoutes::routes(store))
        .fallback(handle_fallback)
        .layer(setup_cors(config))
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(set_request_id_layer())
}

/// Bootstrap the store, bind, and serve until Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if the store cannot be bootstrapped, the address cannot
/// be bound, or the server fails while running
pub async fn run(config: ServerConfig) -> AppResult<()> {
    let store = Arc::new(CustomerStore::new(config.database.path.clone()));
    store.bootstrap().await?;

    let app = build_router(store, &config);

    let bind_address = config.bind_address();
    let listener = TcpListener::bind(&bind_address).await.map_err(|e| {
        AppError::internal(format!("Failed to bind {bind_address}: {e}")).with_source(e)
    })?;

    display_available_endpoints(&config);
    info!("Customer API listening on http://{bind_address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")).with_source(e))?;

    info!("Customer API stopped");
    Ok(())
}

fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());

    info!("=== Available Endpoints ===");
    info!("  GET    {base}/");
    info!("  GET    {base}/health");
    info!("  POST   {base}/customers");
    info!("  GET    {base}/customers?name=...|email=...");
    info!("  GET    {base}/customers/:id");
    info!("  PUT    {base}/customers/:id");
    info!("  DELETE {base}/customers/:id");
    info!("=== End of Endpoint List ===");
}

/// Resolve on Ctrl-C or, on Unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C signal, shutting down gracefully"),
            Err(e) => warn!("Failed to install Ctrl+C handler: {e}"),
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                info!("Received terminate signal, shutting down gracefully");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
