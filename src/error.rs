use thiserror::Error;

/// Main error type for the embed gateway
#[derive(Error, Debug)]
pub enum GateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown server label: {0}")]
    UnknownServer(String),

    #[error("Token not found: {0}")]
    TokenNotFound(String),

    #[error("Token expired: {0}")]
    TokenExpired(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GateError>;
