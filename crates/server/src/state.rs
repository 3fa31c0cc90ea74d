use crate::config::ServerConfig;
use crate::error::ServerResult;
use catalogo::Catalog;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Catalog snapshot, read-only for the process lifetime
    pub catalog: Arc<Catalog>,

    /// When the state was built, for uptime reporting
    pub started_at: Instant,
}

impl ServerState {
    /// Create server state around an already-loaded catalog
    pub fn new(config: ServerConfig, catalog: Catalog) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            started_at: Instant::now(),
        }
    }

    /// Load the catalog named by `config.data_path` and build the state
    ///
    /// A missing or malformed document is fatal to startup.
    pub fn load(config: ServerConfig) -> ServerResult<Self> {
        let catalog = Catalog::from_path(&config.data_path)?;
        Ok(Self::new(config, catalog))
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Server metadata for health checks
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub uptime_seconds: u64,
    pub authors: usize,
    pub works: usize,
}
