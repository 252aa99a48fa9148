//! In-dialog request handlers
//!
//! Entry points the application calls from its request handlers:
//!
//! - [`read_ack`](crate::DialogServer::read_ack): ACK for a 2xx confirms the dialog
//! - [`read_bye`](crate::DialogServer::read_bye): BYE from the peer ends the dialog
//! - [`reject_outside_dialog`](crate::DialogServer::reject_outside_dialog): 481 for
//!   requests that matched no dialog

pub mod ack_handler;
pub mod bye_handler;
