//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration with the catalog lookup endpoints
//! - Static assets and the 404 fallback page
//! - Middleware stack (request IDs, logging, compression, CORS, timeout)
//! - Graceful shutdown handling

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::middleware::{log_requests, request_id};
use crate::routes::{authors, health, static_files, works};
use crate::state::ServerState;
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::routing::{get, MethodRouter};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware
///
/// API routes are matched first, with or without a trailing slash; every
/// other path goes to the static file service, whose misses produce the 404
/// page. Route literals are case-sensitive.
///
/// Middleware stack (outermost first):
/// 1. Request tracing
/// 2. Request ID tracking
/// 3. Request logging
/// 4. CORS
/// 5. Compression
/// 6. Timeout handling
pub fn build_router(state: Arc<ServerState>) -> Router {
    // CORS layer
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    let lookups: [(&str, MethodRouter<Arc<ServerState>>); 6] = [
        ("/api", get(authors::list_all)),
        ("/api/apellido/{surname}", get(authors::by_surname)),
        (
            "/api/nombre_apellido/{name}/{surname}",
            get(authors::by_name_and_surname),
        ),
        ("/api/nombre/{name}", get(authors::by_name)),
        ("/api/edicion/{year}", get(works::by_edition_year)),
        ("/health", get(health::health_check)),
    ];
    let api_routes = lookups
        .into_iter()
        .fold(Router::new(), |router, (path, handler)| {
            with_trailing_slash(router, path, handler)
        });

    Router::new()
        .merge(api_routes)
        .fallback_service(static_files(&state.config))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.timeout(),
        ))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(from_fn(log_requests))
        .layer(from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Route `path` and `path/` to the same handler; lookups are reachable with
/// or without a trailing slash.
fn with_trailing_slash(
    router: Router<Arc<ServerState>>,
    path: &str,
    handler: MethodRouter<Arc<ServerState>>,
) -> Router<Arc<ServerState>> {
    router
        .route(path, handler.clone())
        .route(&format!("{path}/"), handler)
}

/// Install the JSON tracing subscriber at the configured level
pub fn init_tracing(config: &ServerConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .json()
        .init();
}

/// Start the catalog HTTP server
///
/// Loads the catalog, then listens until SIGTERM or Ctrl+C.
///
/// # Errors
///
/// Fails before binding with `ServerError::Catalog` if the catalog document is
/// missing or malformed, or `ServerError::Config` if the configured address
/// does not parse. Bind and serve failures are `ServerError::Internal`.
///
/// # Example
///
/// ```rust,no_run
/// use server::ServerConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = ServerConfig::load()?;
///     server::init_tracing(&config);
///     server::start_server(config).await?;
///     Ok(())
/// }
/// ```
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    let addr: SocketAddr = config.socket_addr()?;

    let state = Arc::new(ServerState::load(config.clone())?);
    tracing::info!(
        authors = state.catalog.len(),
        works = state.catalog.work_count(),
        data_path = %config.data_path.display(),
        "Catalog ready"
    );

    let app = build_router(state);

    tracing::info!(
        "Timeout: {}s, CORS: {}, public dir: {}",
        config.timeout_secs,
        config.enable_cors,
        config.public_dir.display()
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Servidor ejecutándose en http://localhost:{}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
