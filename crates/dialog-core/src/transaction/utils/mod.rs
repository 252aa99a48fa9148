//! Request construction helpers for the dialog layer
//!
//! - `request_builders` - in-dialog requests derived from stored dialog messages

pub mod request_builders;

pub use request_builders::create_bye_for_uas;
