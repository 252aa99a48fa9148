//! UAS session handle
//!
//! A [`DialogServerSession`] wraps one [`Dialog`] together with the INVITE
//! server transaction it was created from. Applications answer the INVITE
//! through it ([`respond`](DialogServerSession::respond),
//! [`respond_sdp`](DialogServerSession::respond_sdp),
//! [`write_response`](DialogServerSession::write_response)), hang up with
//! [`bye`](DialogServerSession::bye) and release it with
//! [`close`](DialogServerSession::close).
//!
//! ## Response handling
//!
//! | Response      | Sent | State change  | Registered |
//! |---------------|------|---------------|------------|
//! | 1xx           | yes  | none          | no         |
//! | 2xx           | yes  | `Established` | yes, before sending |
//! | 3xx-6xx       | yes  | `Ended`       | no         |
//!
//! Before anything is sent, a pending CANCEL or an already concluded INVITE
//! transaction aborts the write.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use bytes::Bytes;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use uas_sip_core::builder::{create_response, create_response_with_tag, create_sdp_response};
use uas_sip_core::{Response, StatusCode, TypedHeader};

use crate::dialog::{Dialog, DialogId, DialogState};
use crate::errors::{DialogError, DialogResult};
use crate::transaction::{ServerTransaction, TransactionError};

use super::dialog_server::DialogServerInner;

/// Handle to a UAS dialog
///
/// Clones share the same dialog. Dereferences to the [`Dialog`] record for
/// state and message access.
#[derive(Clone)]
pub struct DialogServerSession {
    pub(crate) inner: Arc<SessionInner>,
}

pub(crate) struct SessionInner {
    pub(crate) dialog: Dialog,

    /// INVITE server transaction this session answers
    pub(crate) invite_tx: Arc<dyn ServerTransaction>,
    invite_tx_terminated: AtomicBool,

    pub(crate) server: Arc<DialogServerInner>,
}

impl SessionInner {
    /// Terminate the INVITE transaction, once
    pub(crate) fn terminate_invite_tx(&self) {
        if !self.invite_tx_terminated.swap(true, Ordering::AcqRel) {
            debug!("Terminating INVITE transaction of dialog {}", self.dialog.display_id());
            self.invite_tx.terminate();
        }
    }

    /// Unregister, end the dialog and cancel its context
    pub(crate) fn close(&self) {
        let this: *const SessionInner = self;
        if let Some(id) = self.dialog.id() {
            self.server.unregister(id, this);
        }
        self.dialog.set_state(DialogState::Ended);
        self.dialog.context().cancel();
    }
}

impl Drop for SessionInner {
    fn drop(&mut self) {
        // Last handle gone: the registry entry can no longer be upgraded
        let this: *const SessionInner = &*self;
        if let Some(id) = self.dialog.id() {
            self.server.unregister(id, this);
        }
        self.dialog.context().cancel();
    }
}

/// Terminates the INVITE transaction and closes the session when dropped
pub(crate) struct SessionCleanup<'a>(pub(crate) &'a SessionInner);

impl Drop for SessionCleanup<'_> {
    fn drop(&mut self) {
        self.0.terminate_invite_tx();
        self.0.close();
    }
}

impl DialogServerSession {
    pub(crate) fn new(
        dialog: Dialog,
        invite_tx: Arc<dyn ServerTransaction>,
        server: Arc<DialogServerInner>,
    ) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                dialog,
                invite_tx,
                invite_tx_terminated: AtomicBool::new(false),
                server,
            }),
        }
    }

    /// The dialog record
    pub fn dialog(&self) -> &Dialog {
        &self.inner.dialog
    }

    /// Respond to the INVITE
    ///
    /// Builds a response from the INVITE (Via, From, To, Call-ID, CSeq and
    /// Record-Route copied, To tagged with the dialog's
    /// [`local_tag`](Dialog::local_tag)), appends `headers` and sends it with
    /// [`write_response`](Self::write_response). Provisional statuses may be
    /// sent any number of times before the final one.
    pub async fn respond(
        &self,
        status: StatusCode,
        reason: Option<&str>,
        body: Bytes,
        headers: Vec<TypedHeader>,
    ) -> DialogResult<()> {
        let dialog = &self.inner.dialog;
        let mut response =
            create_response_with_tag(dialog.invite_request(), status, dialog.local_tag()).with_body(body);
        if let Some(reason) = reason {
            response = response.with_reason(reason);
        }
        for header in headers {
            response.append_header(header);
        }

        self.write_response(response).await
    }

    /// Answer the INVITE with `200 OK` carrying an SDP body
    pub async fn respond_sdp(&self, sdp: impl Into<Bytes>) -> DialogResult<()> {
        let sdp = sdp.into();
        if sdp.is_empty() {
            return Err(DialogError::validation("SDP body is empty"));
        }

        let dialog = &self.inner.dialog;
        let response = create_sdp_response(dialog.invite_request(), dialog.local_tag(), sdp);
        self.write_response(response).await
    }

    /// Send a response on the INVITE transaction
    ///
    /// The configured Contact is appended, and a To header without a tag gets
    /// the dialog's local tag (except on `100 Trying`). For a 2xx the dialog is
    /// registered under the identity the response fixes before the response
    /// goes out, so an ACK sent immediately by the peer always finds it; if
    /// sending fails the registration is rolled back. Only a response that was
    /// actually sent becomes the dialog's INVITE response.
    ///
    /// # Errors
    ///
    /// - [`DialogError::Canceled`] if a CANCEL is pending (it is answered with `200 OK`)
    /// - [`DialogError::Transaction`] if the INVITE transaction has concluded, the
    ///   send fails, or the `200 OK` to a pending CANCEL cannot be sent
    /// - [`DialogError::InvalidState`] if the dialog has already ended
    pub async fn write_response(&self, mut response: Response) -> DialogResult<()> {
        let inner = &*self.inner;
        if inner.dialog.is_ended() {
            return Err(DialogError::invalid_state(format!(
                "cannot send {} on an ended dialog",
                response.status()
            )));
        }

        let status = response.status();
        if status != StatusCode::Trying {
            for header in response.headers.iter_mut() {
                if let TypedHeader::To(to) = header {
                    if to.tag().is_none() {
                        to.set_tag(inner.dialog.local_tag());
                    }
                }
            }
        }
        response.append_header(TypedHeader::Contact(inner.server.config.contact.clone()));

        let tx = &inner.invite_tx;
        if let Some(cancel) = tx.try_recv_cancel() {
            info!("INVITE canceled before {} could be sent", status);
            tx.respond(create_response(&cancel, StatusCode::Ok)).await?;
            return Err(DialogError::Canceled);
        }
        if tx.done().is_cancelled() {
            return Err(tx.error().unwrap_or(TransactionError::Terminated).into());
        }

        if response.is_provisional() {
            debug!("Sending provisional response {}", status);
            tx.respond(response.clone()).await?;
            inner.dialog.set_invite_response(response);
            return Ok(());
        }

        if !response.is_success() {
            tx.respond(response.clone()).await?;
            inner.dialog.set_invite_response(response);
            info!("INVITE rejected with {}", status);
            inner.close();
            return Ok(());
        }

        let id = DialogId::from_response(&response)?;
        inner.dialog.establish(id.clone())?;
        inner.server.register(id.clone(), &self.inner);
        inner.dialog.set_state(DialogState::Established);

        if let Err(e) = tx.respond(response.clone()).await {
            warn!("Failed to send 2xx for dialog {}: {}", id, e);
            inner.close();
            return Err(e.into());
        }
        inner.dialog.set_invite_response(response);

        Ok(())
    }

    /// Remove the dialog from the registry and end it
    ///
    /// Idempotent, and safe on a dialog that was never established.
    pub fn close(&self) {
        debug!("Closing dialog {}", self.inner.dialog.display_id());
        self.inner.close();
    }

    /// [`bye`](Self::bye) with a timeout instead of a caller-owned deadline
    ///
    /// Returns [`DialogError::Timeout`] if `timeout` elapses first; cleanup runs either way.
    pub async fn bye_with_timeout(&self, timeout: Duration) -> DialogResult<()> {
        let deadline = CancellationToken::new();
        match tokio::time::timeout(timeout, self.bye(&deadline)).await {
            Ok(result) => result,
            Err(_) => {
                warn!("BYE for dialog {} timed out", self.inner.dialog.display_id());
                Err(DialogError::Timeout)
            }
        }
    }
}

impl Deref for DialogServerSession {
    type Target = Dialog;

    fn deref(&self) -> &Dialog {
        &self.inner.dialog
    }
}

impl fmt::Debug for DialogServerSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogServerSession")
            .field("id", &self.inner.dialog.id())
            .field("state", &self.inner.dialog.state())
            .finish()
    }
}
