pub mod response;

use crate::config::{Config, StoreBackend};
use crate::db::{self, MemoryRecipeStore, PgRecipeStore, SharedStore};
use crate::features;
use crate::middleware;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::{future::IntoFuture, net::SocketAddr, sync::Arc, time::Duration};
use tokio::{signal, sync::Notify};
use tower_http::compression::CompressionLayer;

/// Build the recipe store selected by `config.store`
///
/// For PostgreSQL this opens the pool and applies pending migrations.
pub async fn build_store(config: &Config) -> anyhow::Result<SharedStore> {
    match config.store {
        StoreBackend::Postgres => {
            let pool = db::create_pool(&config.database).await?;
            db::run_migrations(&pool).await?;
            Ok(Arc::new(PgRecipeStore::new(pool)))
        },
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory recipe store; data is lost on shutdown");
            Ok(Arc::new(MemoryRecipeStore::new()))
        },
    }
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let store = build_store(&config).await?;
    tracing::info!(backend = %config.store, "Recipe store ready");

    let app = create_router(store, &config);

    let addr: SocketAddr = config.bind_address().parse()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    let shutdown = Arc::new(Notify::new());
    let server = axum::serve(listener, app)
        .with_graceful_shutdown({
            let shutdown = shutdown.clone();
            async move {
                shutdown_signal().await;
                shutdown.notify_one();
            }
        })
        .into_future();
    let drain_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    tokio::select! {
        result = server => {
            result?;
            tracing::info!("Server shut down gracefully");
        },
        _ = drain_deadline(shutdown, drain_timeout) => {
            tracing::warn!(
                "Connections still open after {} seconds, forcing shutdown",
                drain_timeout.as_secs()
            );
        },
    }

    Ok(())
}

/// Create the application router with all routes and middleware
pub fn create_router(store: SharedStore, config: &Config) -> Router {
    let feature_routes = features::router(features::FeatureState {
        store: store.clone(),
    });

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(store)
        .nest("/api", feature_routes)
        // Apply layers from innermost to outermost
        .layer(CompressionLayer::new())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

async fn root() -> impl IntoResponse {
    Json(json!({
        "name": "Recipes Server",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

async fn health(State(store): State<SharedStore>) -> Response {
    match store.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "store": "connected"
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Store health check failed: {:?}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "store": "disconnected"
                })),
            )
                .into_response()
        },
    }
}

/// Resolves `timeout` after `shutdown` is notified
///
/// Bounds how long open connections may take to drain once a shutdown
/// signal has been received.
async fn drain_deadline(shutdown: Arc<Notify>, timeout: Duration) {
    shutdown.notified().await;
    tracing::info!("Waiting up to {} seconds for connections to close", timeout.as_secs());
    tokio::time::sleep(timeout).await;
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
