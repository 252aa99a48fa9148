//! Core dialog types
//!
//! - [`DialogId`]: the (Call-ID, local tag, remote tag) identity of a dialog
//! - [`DialogState`]: lifecycle states of a UAS dialog
//! - [`Dialog`]: the per-dialog record shared by a session handle and the registry
//!
//! ## Dialog Lifecycle
//!
//! ```text
//! Init ──2xx sent──► Established ──ACK──► Confirmed ──BYE──► Ended
//!   │                     │                                   ▲
//!   └──3xx-6xx sent───────┴───────────── close / BYE ─────────┘
//! ```

pub mod dialog_id;
pub mod dialog_impl;
pub mod dialog_state;

// Re-export main types
pub use dialog_id::DialogId;
pub use dialog_impl::Dialog;
pub use dialog_state::DialogState;
