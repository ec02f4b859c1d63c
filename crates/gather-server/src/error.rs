//! Error types for the server binary.

use gather_api::server::ServerError;

/// Errors that can occur during service startup or operation.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Configuration is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// The HTTP server failed to bind or serve.
    #[error("server error: {0}")]
    Server(#[from] ServerError),
}
