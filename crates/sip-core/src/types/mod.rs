//! # SIP message types
//!
//! The subset of the SIP message model the UAS dialog layer works with:
//! methods, status codes, URIs, name-addresses, typed headers and the
//! request/response containers.

pub mod address;
pub mod call_id;
pub mod contact;
pub mod content_type;
pub mod cseq;
pub mod from;
pub mod header;
pub mod method;
pub mod param;
pub mod record_route;
pub mod route;
pub mod sip_request;
pub mod sip_response;
pub mod status;
pub mod to;
pub mod uri;

pub use address::Address;
pub use call_id::CallId;
pub use contact::Contact;
pub use content_type::ContentType;
pub use cseq::CSeq;
pub use from::From;
pub use header::{HeaderAccess, HeaderName, TypedHeader};
pub use method::Method;
pub use param::Param;
pub use record_route::{RecordRoute, RecordRouteEntry};
pub use route::{Route, RouteEntry};
pub use sip_request::Request;
pub use sip_response::Response;
pub use status::StatusCode;
pub use to::To;
pub use uri::{Scheme, Uri};
