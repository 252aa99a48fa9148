//! # Message builders
//!
//! Helpers that derive responses from the request they answer.

mod response;

pub use response::{create_response, create_response_with_tag, create_sdp_response, generate_tag};
