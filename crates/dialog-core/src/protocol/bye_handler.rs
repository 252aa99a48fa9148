//! BYE Request Handler
//!
//! This module handles BYE requests according to RFC 3261 Section 15.1.2.
//!
//! ## BYE Processing Steps
//!
//! 1. **Dialog Identification**: match the BYE to a registered dialog and take it
//!    out of the registry
//! 2. **Response Generation**: send 200 OK on the BYE transaction
//! 3. **Resource Cleanup**: terminate the INVITE transaction, close the dialog
//!
//! Cleanup runs even if the 200 OK cannot be sent.
//!
//! ## Error Handling
//!
//! - **481 Call/Transaction Does Not Exist**: no matching dialog; the caller
//!   decides whether to send it, see [`DialogServer::reject_outside_dialog`]

use tracing::info;

use uas_sip_core::builder::create_response;
use uas_sip_core::{Request, StatusCode};

use crate::dialog::DialogState;
use crate::errors::DialogResult;
use crate::server::DialogServer;
use crate::server::session::SessionCleanup;
use crate::transaction::ServerTransaction;

impl DialogServer {
    /// Route a BYE to its dialog and end it
    ///
    /// `tx` is the BYE's own server transaction.
    ///
    /// # Errors
    ///
    /// - [`OutsideDialog`](crate::DialogError::OutsideDialog) if Call-ID or tags are missing
    /// - [`DialogNotFound`](crate::DialogError::DialogNotFound) if no registered dialog matches,
    ///   including a dialog a concurrent BYE has already taken
    /// - [`Transaction`](crate::DialogError::Transaction) if the 200 OK cannot be sent; the
    ///   dialog is closed anyway
    pub async fn read_bye(&self, request: &Request, tx: &dyn ServerTransaction) -> DialogResult<()> {
        let (id, session) = self.take_session(request)?;
        info!("BYE received for dialog {}", id);

        let _cleanup = SessionCleanup(&session.inner);

        tx.respond(create_response(request, StatusCode::Ok)).await?;
        session.dialog().set_state(DialogState::Ended);

        Ok(())
    }

    /// Answer a request that matched no dialog with `481 Call/Transaction Does Not Exist`
    pub async fn reject_outside_dialog(&self, request: &Request, tx: &dyn ServerTransaction) -> DialogResult<()> {
        info!("Rejecting {} outside of any dialog", request.method);
        let response = create_response(request, StatusCode::CallOrTransactionDoesNotExist);
        tx.respond(response).await?;
        Ok(())
    }
}
