//! API route handlers
//!
//! Routes are organized by what they look up:
//!
//! - `authors`: full listing and the surname / name / name+surname lookups
//! - `works`: works by edition year, flattened across authors
//! - `health`: liveness check

pub mod authors;
pub mod health;
pub mod works;

use crate::config::ServerConfig;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_status::SetStatus;

/// Static assets with the 404 page as fallback
///
/// Anything no API route claims is looked up under `public_dir`; `/` resolves
/// to `index.html`. Misses are answered with the configured 404 page and a
/// 404 status.
pub fn static_files(config: &ServerConfig) -> ServeDir<SetStatus<ServeFile>> {
    ServeDir::new(&config.public_dir)
        .not_found_service(ServeFile::new(config.not_found_page_path()))
}
