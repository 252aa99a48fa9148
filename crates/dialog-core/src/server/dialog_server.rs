//! Dialog registry
//!
//! [`DialogServer`] is the entry point of the UAS dialog layer. It creates a
//! [`DialogServerSession`] for each inbound INVITE and keeps an index of the
//! established ones by [`DialogId`], so that ACK and BYE requests can be routed
//! to the right session (see [`read_ack`](DialogServer::read_ack) and
//! [`read_bye`](DialogServer::read_bye)).
//!
//! The index holds weak references only: a session stays alive as long as the
//! application holds a handle to it, and dropping the last handle removes its
//! entry.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use uas_dialog_core::{DialogServer, ServerTransaction};
//! use uas_sip_core::{Request, StatusCode};
//!
//! async fn on_invite(
//!     server: &DialogServer,
//!     invite: Request,
//!     tx: Arc<dyn ServerTransaction>,
//! ) -> uas_dialog_core::DialogResult<()> {
//!     let session = server.read_invite(invite, tx)?;
//!     session.respond(StatusCode::Ringing, None, Default::default(), Vec::new()).await?;
//!     session.respond_sdp("v=0\r\n").await?;
//!     Ok(())
//! }
//! ```

use std::sync::{Arc, Weak};

use dashmap::DashMap;
use tracing::{debug, info};

use uas_sip_core::{Contact, HeaderAccess, Request};

use crate::config::DialogServerConfig;
use crate::dialog::{Dialog, DialogId};
use crate::errors::{DialogError, DialogResult};
use crate::transaction::{ServerTransaction, SignalingClient};

use super::session::{DialogServerSession, SessionInner};

/// Registry of UAS dialogs
///
/// Cheap to clone; clones share the same registry.
#[derive(Clone)]
pub struct DialogServer {
    pub(crate) inner: Arc<DialogServerInner>,
}

pub(crate) struct DialogServerInner {
    /// Established dialogs by identity
    pub(crate) dialogs: DashMap<DialogId, Weak<SessionInner>>,

    pub(crate) config: DialogServerConfig,

    /// Originates the BYE of a local hangup
    pub(crate) client: Arc<dyn SignalingClient>,
}

impl DialogServer {
    /// Create a dialog server with default settings
    ///
    /// `contact` is appended to every response; `client` sends BYE requests.
    pub fn new(client: Arc<dyn SignalingClient>, contact: Contact) -> Self {
        Self::build(client, DialogServerConfig::new(contact))
    }

    /// Create a dialog server from a configuration
    pub fn with_config(client: Arc<dyn SignalingClient>, config: DialogServerConfig) -> DialogResult<Self> {
        config.validate()?;
        Ok(Self::build(client, config))
    }

    fn build(client: Arc<dyn SignalingClient>, config: DialogServerConfig) -> Self {
        Self {
            inner: Arc::new(DialogServerInner {
                dialogs: DashMap::new(),
                config,
                client,
            }),
        }
    }

    /// Create a session for an inbound INVITE
    ///
    /// The INVITE must carry a Contact header. The session starts in
    /// [`Init`](crate::dialog::DialogState::Init) and is not routable until a 2xx
    /// has been sent through it.
    pub fn read_invite(
        &self,
        request: Request,
        tx: Arc<dyn ServerTransaction>,
    ) -> DialogResult<DialogServerSession> {
        if request.contact().is_none() {
            return Err(DialogError::NoContact);
        }

        let dialog = Dialog::new(request, self.inner.config.state_channel_capacity);
        debug!(
            "Created UAS session for INVITE (Call-ID {})",
            dialog
                .invite_request()
                .call_id()
                .map(|c| c.value())
                .unwrap_or("<none>")
        );

        Ok(DialogServerSession::new(dialog, tx, self.inner.clone()))
    }

    /// Contact header appended to every response
    pub fn contact(&self) -> &Contact {
        &self.inner.config.contact
    }

    pub fn config(&self) -> &DialogServerConfig {
        &self.inner.config
    }

    /// Number of registered dialogs
    pub fn len(&self) -> usize {
        self.inner.dialogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.dialogs.is_empty()
    }

    /// Whether a dialog with this identity is registered
    pub fn contains(&self, id: &DialogId) -> bool {
        self.inner.dialogs.contains_key(id)
    }
}

impl DialogServerInner {
    /// Index a session under its identity
    pub(crate) fn register(&self, id: DialogId, session: &Arc<SessionInner>) {
        info!("Registering dialog {}", id);
        self.dialogs.insert(id, Arc::downgrade(session));
    }

    /// Remove the entry for `id` if it belongs to `session`
    pub(crate) fn unregister(&self, id: &DialogId, session: *const SessionInner) -> bool {
        let removed = self
            .dialogs
            .remove_if(id, |_, entry| std::ptr::eq(entry.as_ptr(), session))
            .is_some();
        if removed {
            debug!("Unregistered dialog {}", id);
        }
        removed
    }
}
