//! # uas-sip-core
//!
//! SIP message model for the UAS dialog core.
//!
//! This crate carries the typed representation of SIP requests and responses
//! that the dialog layer reads and produces. Parsing from and serialization to
//! the wire belong to the transport layer; values here are built in code or
//! parsed header by header through [`std::str::FromStr`], backed by nom
//! grammars for URIs and name-addrs.
//!
//! ## Example
//!
//! ```rust
//! use uas_sip_core::prelude::*;
//! use uas_sip_core::builder::create_response;
//!
//! let invite = Request::new(Method::Invite, "sip:bob@biloxi.example.com".parse().unwrap())
//!     .with_header(TypedHeader::From("<sip:alice@atlanta.example.com>;tag=1928301774".parse().unwrap()))
//!     .with_header(TypedHeader::To("<sip:bob@biloxi.example.com>".parse().unwrap()))
//!     .with_header(TypedHeader::CallId(CallId::new("a84b4c76e66710")));
//!
//! let ok = create_response(&invite, StatusCode::Ok);
//! assert!(ok.to().and_then(|to| to.tag()).is_some());
//! ```

pub mod builder;
pub mod error;
mod parser;
pub mod prelude;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
