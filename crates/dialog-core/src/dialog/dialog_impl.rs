//! Dialog record
//!
//! One [`Dialog`] exists per INVITE handled by a
//! [`DialogServerSession`](crate::server::DialogServerSession). It captures the
//! INVITE and the latest response sent to it, holds the identity once a 2xx
//! fixes it, and tracks the lifecycle state in a single atomic so the session
//! and the request router can read and advance it without a lock.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU8, Ordering};

use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use uas_sip_core::builder::generate_tag;
use uas_sip_core::{HeaderAccess, Request, Response};

use super::dialog_id::DialogId;
use super::dialog_state::DialogState;
use crate::errors::{DialogError, DialogResult};

/// A UAS dialog record
#[derive(Debug)]
pub struct Dialog {
    /// Set exactly once, when the first 2xx is sent
    id: OnceLock<DialogId>,

    /// The INVITE that created this dialog
    invite_request: Request,

    /// To tag of every response sent to the INVITE
    local_tag: String,

    /// Latest response sent to the INVITE
    invite_response: RwLock<Option<Response>>,

    state: AtomicU8,

    state_tx: mpsc::Sender<DialogState>,
    state_rx: Mutex<Option<mpsc::Receiver<DialogState>>>,

    /// Lifetime of the dialog, cancelled when it is closed
    context: CancellationToken,
}

impl Dialog {
    /// Create a record for a freshly received INVITE
    ///
    /// `state_channel_capacity` must be non-zero.
    pub fn new(invite_request: Request, state_channel_capacity: usize) -> Self {
        let (state_tx, state_rx) = mpsc::channel(state_channel_capacity);
        let local_tag = invite_request
            .to()
            .and_then(|to| to.tag())
            .map(str::to_string)
            .unwrap_or_else(generate_tag);
        Self {
            id: OnceLock::new(),
            invite_request,
            local_tag,
            invite_response: RwLock::new(None),
            state: AtomicU8::new(DialogState::Init as u8),
            state_tx,
            state_rx: Mutex::new(Some(state_rx)),
            context: CancellationToken::new(),
        }
    }

    /// Dialog identity, `None` until a 2xx has been sent
    pub fn id(&self) -> Option<&DialogId> {
        self.id.get()
    }

    /// Fix the dialog identity
    ///
    /// Setting the same identity again is a no-op; a different one is rejected.
    pub(crate) fn establish(&self, id: DialogId) -> DialogResult<()> {
        let current = self.id.get_or_init(|| id.clone());
        if *current != id {
            return Err(DialogError::IdentityMismatch {
                expected: current.to_string(),
                actual: id.to_string(),
            });
        }
        Ok(())
    }

    /// Local tag, fixed when the INVITE is received
    pub fn local_tag(&self) -> &str {
        &self.local_tag
    }

    pub fn invite_request(&self) -> &Request {
        &self.invite_request
    }

    /// Latest response successfully sent to the INVITE
    pub fn invite_response(&self) -> Option<Response> {
        self.invite_response.read().clone()
    }

    pub(crate) fn set_invite_response(&self, response: Response) {
        *self.invite_response.write() = Some(response);
    }

    pub fn state(&self) -> DialogState {
        DialogState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub fn is_ended(&self) -> bool {
        self.state() == DialogState::Ended
    }

    /// Advance the lifecycle state
    ///
    /// Moves forward only: a transition to the current or an earlier state is
    /// ignored, which keeps `Ended` terminal. Returns whether the state changed.
    /// Every change is offered to the state channel without waiting; it is
    /// dropped if the channel is full or nobody listens.
    pub(crate) fn set_state(&self, state: DialogState) -> bool {
        let previous = self
            .state
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                (state as u8 > current).then_some(state as u8)
            });

        match previous {
            Ok(previous) => {
                debug!(
                    "Dialog {} state {} -> {}",
                    self.display_id(),
                    DialogState::from_u8(previous),
                    state
                );
                if let Err(e) = self.state_tx.try_send(state) {
                    debug!("Dropped state notification {}: {}", state, e);
                }
                true
            }
            Err(_) => false,
        }
    }

    /// Take the receiver of state changes
    ///
    /// Only the first call returns `Some`.
    pub fn state_changes(&self) -> Option<mpsc::Receiver<DialogState>> {
        self.state_rx.lock().take()
    }

    /// Token cancelled when the dialog is closed
    ///
    /// Work tied to the dialog's lifetime should select on it.
    pub fn context(&self) -> &CancellationToken {
        &self.context
    }

    pub(crate) fn display_id(&self) -> String {
        match self.id() {
            Some(id) => id.to_string(),
            None => "<unestablished>".to_string(),
        }
    }
}
