//! Error types for the SIP message model

use thiserror::Error;

use crate::types::header::HeaderName;

/// Result type for SIP message operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing or inspecting SIP messages
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A URI could not be parsed
    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    /// A name-addr or addr-spec could not be parsed
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// A numeric status code outside 100..=699
    #[error("Invalid status code: {0}")]
    InvalidStatusCode(u16),

    /// A method token that is empty or contains whitespace
    #[error("Invalid method: {0}")]
    InvalidMethod(String),

    /// A header required for the operation is absent
    #[error("Missing {0} header")]
    MissingHeader(HeaderName),
}
