use crate::error::ServerResult;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON document the catalog is loaded from
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Directory of static assets served at `/`
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    /// Page returned with 404 for unmatched routes, relative to `public_dir`
    #[serde(default = "default_not_found_page")]
    pub not_found_page: PathBuf,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            data_path: default_data_path(),
            public_dir: default_public_dir(),
            not_found_page: default_not_found_page(),
            timeout_secs: default_timeout_secs(),
            enable_cors: default_true(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from config files and environment variables
    ///
    /// Precedence, lowest first: defaults, `server.{toml,yaml,json}`,
    /// `CATALOGO__*` variables, then a bare `PORT`.
    pub fn load() -> ServerResult<Self> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("server").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("CATALOGO").separator("__"))
            .set_override_option("port", std::env::var("PORT").ok())?;

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Get the socket address to bind to
    ///
    /// An unparseable address is a `ServerError::Config`.
    pub fn socket_addr(&self) -> ServerResult<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full path of the fallback 404 page
    pub fn not_found_page_path(&self) -> PathBuf {
        self.public_dir.join(&self.not_found_page)
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/ebooks.json")
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_not_found_page() -> PathBuf {
    PathBuf::from("error-404.html")
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
