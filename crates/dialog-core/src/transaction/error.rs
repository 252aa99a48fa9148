//! Errors reported by the transaction layer

use thiserror::Error;

/// Terminal error of a client or server transaction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// Timer B/F (client) or Timer H (server) fired
    #[error("Transaction timed out")]
    Timeout,

    /// The transport failed to deliver a message
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The transaction was terminated before it could complete the operation
    #[error("Transaction terminated")]
    Terminated,

    /// Any other transaction failure
    #[error("Transaction error: {message}")]
    Other { message: String },
}

impl TransactionError {
    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}
