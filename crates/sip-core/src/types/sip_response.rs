//! # SIP Response Message
//!
//! A status line (code and reason phrase), typed headers and an opaque body.

use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::types::header::{HeaderAccess, TypedHeader};
use crate::types::status::StatusCode;

/// A SIP response message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// The status code
    pub status: StatusCode,
    /// Custom reason phrase, the status default is used when `None`
    pub reason: Option<String>,
    /// The headers of the response
    pub headers: Vec<TypedHeader>,
    /// The body of the response
    pub body: Bytes,
}

impl Response {
    pub fn new(status: StatusCode) -> Self {
        Response {
            status,
            reason: None,
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
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

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// The reason phrase that goes on the wire
    pub fn reason_phrase(&self) -> &str {
        self.reason
            .as_deref()
            .unwrap_or_else(|| self.status.reason_phrase())
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn is_provisional(&self) -> bool {
        self.status.is_provisional()
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn is_final(&self) -> bool {
        self.status.is_final()
    }
}

impl HeaderAccess for Response {
    fn headers(&self) -> &[TypedHeader] {
        &self.headers
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SIP/2.0 {} {}", self.status.as_u16(), self.reason_phrase())
    }
}
