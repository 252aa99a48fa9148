//! Dialog identity
//!
//! RFC 3261 Section 12: a dialog is identified by the Call-ID, the local tag
//! and the remote tag. For a UAS the local tag is the To tag it generated and
//! the remote tag is the caller's From tag, for every message received within
//! the dialog and for the responses it sends.

use std::fmt;

use serde::{Deserialize, Serialize};

use uas_sip_core::{HeaderAccess, Request, Response};

use crate::errors::{DialogError, DialogResult};

/// Identity of a dialog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DialogId {
    /// Call-ID shared by all messages of the dialog
    pub call_id: String,
    /// Tag this UAS put in its To header
    pub local_tag: String,
    /// Tag the caller put in its From header
    pub remote_tag: String,
}

impl DialogId {
    pub fn new(
        call_id: impl Into<String>,
        local_tag: impl Into<String>,
        remote_tag: impl Into<String>,
    ) -> Self {
        Self {
            call_id: call_id.into(),
            local_tag: local_tag.into(),
            remote_tag: remote_tag.into(),
        }
    }

    /// Identity of a request received within a dialog (ACK, BYE)
    pub fn from_request(request: &Request) -> DialogResult<Self> {
        Self::from_parts(request, Side::Uas)
    }

    /// Identity fixed by a response this UAS sends
    pub fn from_response(response: &Response) -> DialogResult<Self> {
        Self::from_parts(response, Side::Uas)
    }

    /// Identity of a request this UAS originates within the dialog
    ///
    /// Local and remote are swapped with respect to [`from_request`](Self::from_request):
    /// the local tag is in From.
    pub fn from_outgoing_request(request: &Request) -> DialogResult<Self> {
        Self::from_parts(request, Side::Uac)
    }

    fn from_parts(message: &impl HeaderAccess, side: Side) -> DialogResult<Self> {
        let call_id = message
            .call_id()
            .ok_or_else(|| DialogError::outside_dialog("missing Call-ID header"))?;
        let from_tag = message
            .from()
            .and_then(|from| from.tag())
            .ok_or_else(|| DialogError::outside_dialog("missing From tag"))?;
        let to_tag = message
            .to()
            .and_then(|to| to.tag())
            .ok_or_else(|| DialogError::outside_dialog("missing To tag"))?;

        let (local_tag, remote_tag) = match side {
            Side::Uas => (to_tag, from_tag),
            Side::Uac => (from_tag, to_tag),
        };
        Ok(Self::new(call_id.value(), local_tag, remote_tag))
    }
}

/// Which header carries the local tag
#[derive(Clone, Copy)]
enum Side {
    /// Local tag in To
    Uas,
    /// Local tag in From
    Uac,
}

impl fmt::Display for DialogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}__{}__{}", self.call_id, self.local_tag, self.remote_tag)
    }
}
