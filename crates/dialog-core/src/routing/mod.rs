//! Request-to-dialog matching
//!
//! RFC 3261 Section 12.2.2: a request received within a dialog is matched by
//! its Call-ID, To tag (local) and From tag (remote).

pub mod dialog_matcher;
