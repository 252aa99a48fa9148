//! # uas-dialog-core
//!
//! Server-side (UAS) dialog lifecycle for SIP, following RFC 3261 Sections 12,
//! 13.3 and 15.
//!
//! The crate sits between an application's call handling and the transaction
//! layer. It answers an inbound INVITE, keeps established dialogs addressable
//! by identity so in-dialog ACK and BYE requests find them, and performs a
//! local hangup (wait for ACK, build and send BYE, await its 2xx).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        Application                         │
//! └──────┬─────────────────────────┬───────────────────────────┘
//!        │ read_invite / read_ack  │ respond / bye / close
//!        │ read_bye                │
//! ┌──────▼────────────┐  index  ┌──▼──────────────────┐
//! │   DialogServer    │◄───────►│ DialogServerSession │──► Dialog (id, state, messages)
//! └──────┬────────────┘  (weak) └──┬──────────────────┘
//!        │ SignalingClient         │ ServerTransaction
//! ┌──────▼─────────────────────────▼───────────────────────────┐
//! │                 Transaction layer (external)               │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//!
//! 1. [`DialogServer::read_invite`] creates a session in `Init`.
//! 2. Provisional responses leave it in `Init`; a 2xx registers it and moves it
//!    to `Established`; a 3xx-6xx ends it.
//! 3. [`DialogServer::read_ack`] moves it to `Confirmed`.
//! 4. [`DialogServer::read_bye`] or [`DialogServerSession::bye`] end it and remove it
//!    from the registry.
//!
//! ## Logging
//!
//! The crate emits `tracing` events and never installs a subscriber.

pub mod config;
pub mod dialog;
pub mod errors;
pub mod protocol;
pub mod routing;
pub mod server;
pub mod transaction;

pub use config::DialogServerConfig;
pub use dialog::{Dialog, DialogId, DialogState};
pub use errors::{DialogError, DialogResult};
pub use server::{DialogServer, DialogServerSession};
pub use transaction::{
    ClientTransaction, ServerTransaction, SignalingClient, TimerSettings, TransactionError,
};
