//! Server error types.

use thiserror::Error;

use diceware_core::DicewareError;

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// A dictionary could not be loaded.
    #[error(transparent)]
    Dictionary(#[from] DicewareError),

    /// Socket or file I/O failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The listen address is not a valid socket address.
    #[error("invalid listen address: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    /// The TLS certificate or key could not be loaded.
    #[error("tls configuration error: {0}")]
    Tls(String),

    /// The logging subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

/// Result alias for the server.
pub type Result<T> = std::result::Result<T, ServerError>;
