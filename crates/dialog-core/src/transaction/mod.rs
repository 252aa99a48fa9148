//! Transaction layer seam
//!
//! The dialog core does not own transactions. It consumes them through the
//! traits in this module, which the embedding stack implements on top of its
//! transaction layer:
//!
//! - [`ServerTransaction`]: the INVITE (or BYE) server transaction a request
//!   arrived on. Responses are sent through it, a pending CANCEL can be
//!   polled without blocking, and its conclusion is observable through a
//!   [`CancellationToken`].
//! - [`ClientTransaction`]: a transaction originated by the dialog core (the
//!   BYE it sends on local hangup).
//! - [`SignalingClient`]: the capability to originate client transactions.
//!
//! ```text
//!  application ──► DialogServer ──► DialogServerSession
//!                                      │          │
//!                    ServerTransaction ◄┘          └► SignalingClient ──► ClientTransaction
//! ```

pub mod error;
pub mod timer;
pub mod utils;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use uas_sip_core::{Request, Response};

pub use error::TransactionError;
pub use timer::TimerSettings;

/// Server transaction an inbound request arrived on
#[async_trait]
pub trait ServerTransaction: Send + Sync {
    /// Send a response on this transaction
    async fn respond(&self, response: Response) -> Result<(), TransactionError>;

    /// Take a CANCEL received for this transaction, if one is pending
    ///
    /// Never blocks.
    fn try_recv_cancel(&self) -> Option<Request>;

    /// Token cancelled once the transaction has concluded (completed, timed out or failed)
    fn done(&self) -> CancellationToken;

    /// Terminal error, available once [`done`](Self::done) has fired
    fn error(&self) -> Option<TransactionError>;

    /// Terminate the transaction; must be safe to call more than once
    fn terminate(&self);
}

/// Client transaction originated by the dialog core
#[async_trait]
pub trait ClientTransaction: Send + Sync {
    /// Next response received on this transaction, `None` once the transaction is over
    async fn recv_response(&self) -> Option<Response>;

    /// Token cancelled once the transaction has concluded
    fn done(&self) -> CancellationToken;

    /// Terminal error, available once [`done`](Self::done) has fired
    fn error(&self) -> Option<TransactionError>;

    /// Terminate the transaction; must be safe to call more than once
    fn terminate(&self);
}

/// Capability to originate requests as new client transactions
///
/// The implementation fills in what the dialog core leaves to the lower layers
/// (Via, CSeq, Max-Forwards) and honours [`Request::destination`] when set.
#[async_trait]
pub trait SignalingClient: Send + Sync {
    async fn send_request(&self, request: Request) -> Result<Box<dyn ClientTransaction>, TransactionError>;
}

/// Terminates a client transaction when dropped
pub(crate) struct TerminateOnDrop<'a>(pub(crate) &'a dyn ClientTransaction);

impl Drop for TerminateOnDrop<'_> {
    fn drop(&mut self) {
        self.0.terminate();
    }
}
