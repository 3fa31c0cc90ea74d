//! Catálogo Server - read-only HTTP API over the author/works catalog
//!
//! The catalog is loaded once at startup from a JSON document, sorted by
//! surname under Spanish collation, and shared read-only by every request.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::init_tracing(&config);
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /api` - Full catalog, surname order
//! - `GET /api/apellido/{surname}` - Authors by exact surname
//! - `GET /api/nombre_apellido/{name}/{surname}` - Authors by exact name and surname
//! - `GET /api/nombre/{name}?apellido=<prefix>` - Authors by name, optional surname prefix
//! - `GET /api/edicion/{year}` - Works by edition year, flattened across authors
//! - `GET /health` - Liveness check
//!
//! Lookups that match nothing answer 404 with a plain-text message. Every
//! other path is served from the public directory, falling back to the 404
//! page.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, init_tracing, start_server};
pub use state::ServerState;
