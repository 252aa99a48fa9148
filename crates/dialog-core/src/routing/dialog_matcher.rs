//! Dialog Matching Logic for SIP Request Routing
//!
//! Looks up the session an in-dialog request belongs to. A request whose
//! Call-ID and tags are present but match no registered dialog is
//! [`DialogNotFound`](DialogError::DialogNotFound); a request missing them is
//! [`OutsideDialog`](DialogError::OutsideDialog).

use tracing::debug;

use uas_sip_core::Request;

use crate::dialog::DialogId;
use crate::errors::{DialogError, DialogResult};
use crate::server::{DialogServer, DialogServerSession};

impl DialogServer {
    /// Find the registered session with this identity
    pub fn find_session(&self, id: &DialogId) -> Option<DialogServerSession> {
        // Clone the weak reference first so no shard guard is held while the
        // upgraded handle may be dropped
        let entry = self.inner.dialogs.get(id).map(|entry| entry.value().clone());
        let inner = entry?.upgrade()?;
        Some(DialogServerSession { inner })
    }

    /// Match an in-dialog request to its session
    pub(crate) fn match_request(&self, request: &Request) -> DialogResult<(DialogId, DialogServerSession)> {
        let id = DialogId::from_request(request)?;
        match self.find_session(&id) {
            Some(session) => Ok((id, session)),
            None => {
                debug!("No dialog matches {} {}", request.method, id);
                Err(DialogError::dialog_not_found(id.to_string()))
            }
        }
    }

    /// Remove the session with this identity from the registry and return it
    ///
    /// Only one caller can take a given dialog, which serialises concurrent
    /// BYE handling for the same identity.
    pub(crate) fn take_session(&self, request: &Request) -> DialogResult<(DialogId, DialogServerSession)> {
        let id = DialogId::from_request(request)?;
        let entry = self.inner.dialogs.remove(&id).map(|(_, entry)| entry);
        match entry.and_then(|entry| entry.upgrade()) {
            Some(inner) => Ok((id, DialogServerSession { inner })),
            None => {
                debug!("No dialog matches {} {}", request.method, id);
                Err(DialogError::dialog_not_found(id.to_string()))
            }
        }
    }
}
