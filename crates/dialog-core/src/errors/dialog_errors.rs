//! Dialog error definitions
//!
//! ## Error Categories
//!
//! - **Routing**: `NoContact`, `OutsideDialog`, `DialogNotFound`
//! - **Lifecycle**: `Canceled`, `InvalidState`, `IdentityMismatch`
//! - **Termination**: `UnexpectedResponse`, `Aborted`, `Timeout`
//! - **Propagated**: `Transaction`, `Message`
//! - **Local**: `Configuration`, `Validation`
//!
//! Routing failures are returned to the caller so it can apply the protocol
//! level answer (for example `481 Call/Transaction Does Not Exist`).

use thiserror::Error;

use uas_sip_core::Response;

use crate::transaction::TransactionError;

/// Result type for dialog operations
pub type DialogResult<T> = Result<T, DialogError>;

/// Errors produced by the UAS dialog layer
#[derive(Debug, Clone, Error)]
pub enum DialogError {
    /// The INVITE carried no Contact header, so no dialog can be created from it
    #[error("INVITE request has no Contact header")]
    NoContact,

    /// Call-ID or tags are missing, the request cannot belong to a dialog
    #[error("Request outside dialog: {message}")]
    OutsideDialog { message: String },

    /// No registered dialog matches the request's identity
    #[error("Dialog not found: {id}")]
    DialogNotFound { id: String },

    /// A CANCEL arrived before the final response could be sent
    #[error("Dialog canceled")]
    Canceled,

    /// Operation not allowed in the dialog's current state
    #[error("Invalid dialog state: {message}")]
    InvalidState { message: String },

    /// BYE was answered with a non-2xx final response
    #[error("Unexpected response to BYE: {} {}", .response.status_code(), .response.reason_phrase())]
    UnexpectedResponse { response: Box<Response> },

    /// Error reported by the transaction layer, unchanged
    #[error(transparent)]
    Transaction(#[from] TransactionError),

    /// Error raised by the SIP message model
    #[error("SIP message error: {0}")]
    Message(#[from] uas_sip_core::Error),

    /// The caller's deadline token fired
    #[error("Operation aborted by caller")]
    Aborted,

    /// The timeout given to a timed operation elapsed
    #[error("Operation timed out")]
    Timeout,

    /// Invalid configuration value
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Invalid argument supplied by the application
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The BYE built for a dialog does not carry that dialog's identity
    #[error("Dialog identity mismatch: expected {expected}, got {actual}")]
    IdentityMismatch { expected: String, actual: String },
}

impl DialogError {
    /// Create an outside-dialog error
    pub fn outside_dialog(message: impl Into<String>) -> Self {
        Self::OutsideDialog {
            message: message.into(),
        }
    }

    /// Create a dialog-not-found error
    pub fn dialog_not_found(id: impl Into<String>) -> Self {
        Self::DialogNotFound { id: id.into() }
    }

    /// Create an invalid-state error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether the error means the request matched no dialog
    ///
    /// Such requests should be answered with `481 Call/Transaction Does Not Exist`.
    pub fn is_outside_dialog(&self) -> bool {
        matches!(self, Self::OutsideDialog { .. } | Self::DialogNotFound { .. })
    }
}
