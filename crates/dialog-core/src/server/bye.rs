//! Local hangup of a UAS dialog
//!
//! RFC 3261 Section 15: the callee's UA MUST NOT send a BYE on a confirmed
//! dialog until it has received an ACK for its 2xx response or until the
//! server transaction times out. [`DialogServerSession::bye`] therefore waits
//! for the ACK first, re-checking the dialog state every T1, and only then
//! builds and sends the BYE.
//!
//! ```text
//!  bye() ─► 2xx sent? ─► wait ACK / INVITE tx done ─► build BYE ─► send ─► 2xx ─► Ended
//!                │              (every T1)                                  │
//!                └─► InvalidState                              non-2xx ─► UnexpectedResponse
//! ```
//!
//! Whatever the outcome, once the hangup is under way the INVITE transaction
//! is terminated and the dialog is closed when `bye` returns.

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use uas_sip_core::HeaderAccess;

use crate::dialog::{DialogId, DialogState};
use crate::errors::{DialogError, DialogResult};
use crate::transaction::utils::create_bye_for_uas;
use crate::transaction::{TerminateOnDrop, TransactionError};

use super::session::{DialogServerSession, SessionCleanup, SessionInner};

impl DialogServerSession {
    /// Hang up the dialog by sending BYE
    ///
    /// `deadline` is owned by the caller; cancelling it aborts the hangup with
    /// [`DialogError::Aborted`] at any wait point.
    ///
    /// Calling `bye` on an ended dialog is a no-op. Calling it on a dialog
    /// whose INVITE was not answered with a 2xx fails with
    /// [`DialogError::InvalidState`].
    pub async fn bye(&self, deadline: &CancellationToken) -> DialogResult<()> {
        let inner = &*self.inner;
        if inner.dialog.is_ended() {
            return Ok(());
        }

        let (id, response) = match (inner.dialog.id(), inner.dialog.invite_response()) {
            (Some(id), Some(response)) if response.is_success() => (id, response),
            _ => {
                return Err(DialogError::invalid_state(
                    "BYE requires a 2xx response to the INVITE",
                ));
            }
        };

        let _cleanup = SessionCleanup(inner);

        inner.wait_confirmed(deadline).await?;
        if inner.dialog.is_ended() {
            debug!("Dialog {} ended while waiting for ACK", inner.dialog.display_id());
            return Ok(());
        }

        let mut bye = create_bye_for_uas(inner.dialog.invite_request(), &response)?;
        let bye_id = DialogId::from_outgoing_request(&bye)?;
        if *id != bye_id {
            return Err(DialogError::IdentityMismatch {
                expected: id.to_string(),
                actual: bye_id.to_string(),
            });
        }

        let next_hop = bye.first_route().map(|route| route.uri().host_port());
        if let Some(next_hop) = next_hop {
            bye.set_destination(next_hop);
        }

        info!("Sending BYE for dialog {}", id);
        let tx = tokio::select! {
            biased;
            _ = deadline.cancelled() => return Err(DialogError::Aborted),
            tx = inner.server.client.send_request(bye) => tx?,
        };
        let _terminate = TerminateOnDrop(&*tx);

        let done = tx.done();
        loop {
            tokio::select! {
                biased;
                _ = deadline.cancelled() => return Err(DialogError::Aborted),
                response = tx.recv_response() => match response {
                    Some(response) if response.is_provisional() => continue,
                    Some(response) if response.is_success() => {
                        info!("BYE for dialog {} answered with {}", id, response.status());
                        inner.dialog.set_state(DialogState::Ended);
                        return Ok(());
                    }
                    Some(response) => {
                        return Err(DialogError::UnexpectedResponse {
                            response: Box::new(response),
                        });
                    }
                    None => return Err(tx.error().unwrap_or(TransactionError::Terminated).into()),
                },
                _ = done.cancelled() => {
                    return Err(tx.error().unwrap_or(TransactionError::Terminated).into());
                }
            }
        }
    }
}

impl SessionInner {
    /// Block until the dialog is confirmed, the INVITE transaction is over or
    /// `deadline` fires
    async fn wait_confirmed(&self, deadline: &CancellationToken) -> DialogResult<()> {
        let invite_done = self.invite_tx.done();
        let interval = self.server.config.confirmation_retry_interval;

        while self.dialog.state() < DialogState::Confirmed {
            tokio::select! {
                biased;
                _ = deadline.cancelled() => return Err(DialogError::Aborted),
                _ = invite_done.cancelled() => {
                    debug!(
                        "INVITE transaction of dialog {} ended before ACK",
                        self.dialog.display_id()
                    );
                    break;
                }
                _ = tokio::time::sleep(interval) => {}
            }
        }

        Ok(())
    }
}
