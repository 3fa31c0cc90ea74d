//! Error types produced by the catalog crate.
//!
//! Two error surfaces exist, one per lifecycle phase:
//!
//! | Error | Phase | Description |
//! |-------|-------|-------------|
//! | [`CatalogError`] | Startup | The source document is missing or malformed; the service cannot start |
//! | [`QueryError`] | Request | A lookup matched nothing, or a raw parameter failed to parse |
//!
//! # HTTP Status Code Mapping
//!
//! ```rust
//! use catalogo::QueryError;
//!
//! fn to_http_status(error: &QueryError) -> u16 {
//!     match error {
//!         QueryError::InvalidParameter { .. } => 400,
//!         _ => 404,
//!     }
//! }
//! ```
use std::path::PathBuf;

use thiserror::Error;

/// Failure to build the in-memory catalog from its source document.
///
/// Every variant is fatal: the catalog backs every other operation, so a
/// process that cannot load it must not start serving.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The source document could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source document is not a JSON array of author records.
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures surfaced by the query layer.
///
/// The `Display` output of each variant is the user-facing message the HTTP
/// layer sends back verbatim. Extra context (the criteria that matched
/// nothing) is kept in fields for logging.
///
/// ```rust
/// use catalogo::QueryError;
///
/// let err = QueryError::AuthorNotFound { criteria: "apellido=zzznoexist".into() };
/// assert_eq!(err.to_string(), "Autor no encontrado");
///
/// let err = QueryError::NoWorksForYear { year: 1854 };
/// assert_eq!(err.to_string(), "No se encontraron obras del año 1854");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueryError {
    /// No author satisfied the lookup.
    #[error("Autor no encontrado")]
    AuthorNotFound { criteria: String },

    /// No work across the catalog carries the requested edition year.
    #[error("No se encontraron obras del año {year}")]
    NoWorksForYear { year: i32 },

    /// A raw request parameter could not be turned into a typed value.
    #[error("{}", invalid_parameter_message(.parameter, .value))]
    InvalidParameter {
        parameter: &'static str,
        value: String,
    },
}

impl QueryError {
    /// True for the variants that mean "nothing matched".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            QueryError::AuthorNotFound { .. } | QueryError::NoWorksForYear { .. }
        )
    }
}

fn invalid_parameter_message(parameter: &str, value: &str) -> String {
    match parameter {
        "year" => format!("Año de edición no válido: {value}"),
        other => format!("Parámetro '{other}' no válido: {value}"),
    }
}
