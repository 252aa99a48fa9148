//! UAS dialog server
//!
//! - [`DialogServer`]: registry of dialogs and factory of sessions
//! - [`DialogServerSession`]: handle the application drives a dialog with
//!
//! Request routing into existing sessions (ACK, BYE) lives in
//! [`protocol`](crate::protocol).

mod bye;
pub mod dialog_server;
pub mod session;

pub use dialog_server::DialogServer;
pub use session::DialogServerSession;
