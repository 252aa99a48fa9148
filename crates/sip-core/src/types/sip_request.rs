//! # SIP Request Message
//!
//! A request line (method and Request-URI), typed headers and an opaque body.
//! Requests may also carry a `destination`: a resolved next hop (`host:port`)
//! the transport should use instead of resolving the Request-URI.
//!
//! ## Examples
//!
//! ```rust
//! use uas_sip_core::prelude::*;
//!
//! let request = Request::new(Method::Invite, "sip:bob@biloxi.example.com".parse().unwrap())
//!     .with_header(TypedHeader::From(From::new(
//!         "<sip:alice@atlanta.example.com>;tag=1928301774".parse().unwrap(),
//!     )))
//!     .with_header(TypedHeader::CallId(CallId::new("a84b4c76e66710")));
//!
//! assert_eq!(request.from().and_then(|f| f.tag()), Some("1928301774"));
//! assert!(request.contact().is_none());
//! ```

use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::types::header::{HeaderAccess, TypedHeader};
use crate::types::method::Method;
use crate::types::uri::Uri;

/// A SIP request message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// The method of the request
    pub method: Method,
    /// The request URI
    pub uri: Uri,
    /// The headers of the request
    pub headers: Vec<TypedHeader>,
    /// The body of the request
    pub body: Bytes,
    /// Resolved next hop overriding the Request-URI for transport
    pub destination: Option<String>,
}

impl Request {
    /// Creates a request with empty headers and body
    pub fn new(method: Method, uri: Uri) -> Self {
        Request {
            method,
            uri,
            headers: Vec::new(),
            body: Bytes::new(),
            destination: None,
        }
    }

    pub fn with_header(mut self, header: TypedHeader) -> Self {
        self.headers.push(header);
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn append_header(&mut self, header: TypedHeader) {
        self.headers.push(header);
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Force the transport destination (`host` or `host:port`)
    pub fn set_destination(&mut self, destination: impl Into<String>) {
        self.destination = Some(destination.into());
    }

    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }
}

impl HeaderAccess for Request {
    fn headers(&self) -> &[TypedHeader] {
        &self.headers
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} SIP/2.0", self.method, self.uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::call_id::CallId;
    use crate::types::header::HeaderName;
    use crate::types::record_route::RecordRoute;

    fn request() -> Request {
        Request::new(Method::Invite, "sip:bob@biloxi.example.com".parse().unwrap())
            .with_header(TypedHeader::CallId(CallId::new("a84b4c76e66710")))
            .with_header(TypedHeader::RecordRoute(
                "<sip:p1.example.com;lr>".parse::<RecordRoute>().unwrap(),
            ))
            .with_header(TypedHeader::RecordRoute(
                "<sip:p2.example.com;lr>".parse::<RecordRoute>().unwrap(),
            ))
            .with_body("v=0\r\n")
    }

    #[test]
    fn test_header_access() {
        let request = request();
        assert_eq!(request.call_id().map(|c| c.to_string()), Some("a84b4c76e66710".to_string()));
        assert_eq!(request.headers_named(&HeaderName::RecordRoute).count(), 2);
        assert!(request.first_route().is_none());
        assert!(request.destination().is_none());
    }

    #[test]
    fn test_serde_keeps_destination() {
        let mut request = request();
        request.set_destination("192.0.2.1:5060");

        let json = serde_json::to_string(&request).unwrap();
        let back: Request = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
        assert_eq!(back.destination(), Some("192.0.2.1:5060"));
    }
}
