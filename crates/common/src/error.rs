use thiserror::Error;

use crate::utils::TextDecodeError;

/// Error types for the relay
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Missing header: {0}")]
    MissingHeader(String),

    #[error("Header {0} is not visible ASCII")]
    InvalidHeader(String),

    #[error("Failed to decode header {header}: {source}")]
    Decode {
        header: String,
        #[source]
        source: TextDecodeError,
    },

    #[error("Invalid header count: {0:?}")]
    InvalidHeaderCount(String),

    #[error("Invalid HTTP method: {0:?}")]
    InvalidMethod(String),

    #[error("Invalid header name or value: {0:?}")]
    InvalidOutboundHeader(String),

    #[error("HTTP error: {0}")]
    HttpError(String),
}

/// Type alias for Results using RelayError
pub type Result<T> = std::result::Result<T, RelayError>;
