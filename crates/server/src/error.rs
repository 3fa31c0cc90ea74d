use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalogo::{CatalogError, QueryError};

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Socket bind or serve failure.
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Unreadable configuration or an unusable bind address.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Query(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            ServerError::Query(_) => StatusCode::BAD_REQUEST,
            ServerError::Catalog(_) | ServerError::Internal(_) | ServerError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::Query(err) if err.is_not_found() => "NOT_FOUND",
            ServerError::Query(_) => "INVALID_PARAMETER",
            ServerError::Catalog(_) => "CATALOG_ERROR",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
        }
    }
}

/// Errors are answered in plain text; query misses carry their Spanish
/// message as the whole body.
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        } else {
            tracing::debug!(code = self.error_code(), error = %self, "request rejected");
        }

        (status, self.to_string()).into_response()
    }
}

impl From<std::net::AddrParseError> for ServerError {
    fn from(err: std::net::AddrParseError) -> Self {
        ServerError::Config(format!("Invalid address: {err}"))
    }
}

impl From<config::ConfigError> for ServerError {
    fn from(err: config::ConfigError) -> Self {
        ServerError::Config(err.to_string())
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {err}"))
    }
}
