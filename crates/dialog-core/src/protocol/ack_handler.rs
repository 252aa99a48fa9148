//! ACK Request Handler
//!
//! An ACK for a 2xx moves the matching dialog to `Confirmed`. ACKs are
//! absorbed: no response is ever sent.

use tracing::debug;

use uas_sip_core::Request;

use crate::dialog::DialogState;
use crate::errors::DialogResult;
use crate::server::DialogServer;

impl DialogServer {
    /// Route an ACK to its dialog
    ///
    /// # Errors
    ///
    /// - [`OutsideDialog`](crate::DialogError::OutsideDialog) if Call-ID or tags are missing
    /// - [`DialogNotFound`](crate::DialogError::DialogNotFound) if no registered dialog matches
    pub fn read_ack(&self, request: &Request) -> DialogResult<()> {
        let (id, session) = self.match_request(request)?;
        if session.dialog().set_state(DialogState::Confirmed) {
            debug!("Dialog {} confirmed by ACK", id);
        }
        Ok(())
    }
}
