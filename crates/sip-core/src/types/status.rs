//! # SIP Status Codes
//!
//! Status codes as defined in [RFC 3261 Section 21](https://datatracker.ietf.org/doc/html/rfc3261#section-21).
//!
//! - `1xx`: Provisional
//! - `2xx`: Success
//! - `3xx`: Redirection
//! - `4xx`: Client Error
//! - `5xx`: Server Error
//! - `6xx`: Global Failure
//!
//! ## Examples
//!
//! ```rust
//! use uas_sip_core::StatusCode;
//!
//! let status = StatusCode::Ok;
//! assert_eq!(status.as_u16(), 200);
//! assert!(status.is_success());
//!
//! let status = StatusCode::from_u16(486).unwrap();
//! assert_eq!(status, StatusCode::BusyHere);
//! assert!(status.is_final());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// SIP response status code
///
/// The codes a UAS core commonly produces or inspects have named variants;
/// everything else in 100..=699 is carried by [`StatusCode::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCode {
    Trying,
    Ringing,
    CallIsBeingForwarded,
    Queued,
    SessionProgress,
    Ok,
    Accepted,
    BadRequest,
    Forbidden,
    NotFound,
    RequestTimeout,
    TemporarilyUnavailable,
    CallOrTransactionDoesNotExist,
    BusyHere,
    RequestTerminated,
    ServerInternalError,
    ServiceUnavailable,
    Decline,
    /// Any other valid code
    Other(u16),
}

impl StatusCode {
    /// Convert a numeric code, rejecting values outside 100..=699
    pub fn from_u16(code: u16) -> Result<Self> {
        let status = match code {
            100 => StatusCode::Trying,
            180 => StatusCode::Ringing,
            181 => StatusCode::CallIsBeingForwarded,
            182 => StatusCode::Queued,
            183 => StatusCode::SessionProgress,
            200 => StatusCode::Ok,
            202 => StatusCode::Accepted,
            400 => StatusCode::BadRequest,
            403 => StatusCode::Forbidden,
            404 => StatusCode::NotFound,
            408 => StatusCode::RequestTimeout,
            480 => StatusCode::TemporarilyUnavailable,
            481 => StatusCode::CallOrTransactionDoesNotExist,
            486 => StatusCode::BusyHere,
            487 => StatusCode::RequestTerminated,
            500 => StatusCode::ServerInternalError,
            503 => StatusCode::ServiceUnavailable,
            603 => StatusCode::Decline,
            100..=699 => StatusCode::Other(code),
            _ => return Err(Error::InvalidStatusCode(code)),
        };
        Ok(status)
    }

    /// Numeric value of the code
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Trying => 100,
            StatusCode::Ringing => 180,
            StatusCode::CallIsBeingForwarded => 181,
            StatusCode::Queued => 182,
            StatusCode::SessionProgress => 183,
            StatusCode::Ok => 200,
            StatusCode::Accepted => 202,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::RequestTimeout => 408,
            StatusCode::TemporarilyUnavailable => 480,
            StatusCode::CallOrTransactionDoesNotExist => 481,
            StatusCode::BusyHere => 486,
            StatusCode::RequestTerminated => 487,
            StatusCode::ServerInternalError => 500,
            StatusCode::ServiceUnavailable => 503,
            StatusCode::Decline => 603,
            StatusCode::Other(code) => *code,
        }
    }

    /// Default reason phrase
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Trying => "Trying",
            StatusCode::Ringing => "Ringing",
            StatusCode::CallIsBeingForwarded => "Call Is Being Forwarded",
            StatusCode::Queued => "Queued",
            StatusCode::SessionProgress => "Session Progress",
            StatusCode::Ok => "OK",
            StatusCode::Accepted => "Accepted",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::RequestTimeout => "Request Timeout",
            StatusCode::TemporarilyUnavailable => "Temporarily Unavailable",
            StatusCode::CallOrTransactionDoesNotExist => "Call/Transaction Does Not Exist",
            StatusCode::BusyHere => "Busy Here",
            StatusCode::RequestTerminated => "Request Terminated",
            StatusCode::ServerInternalError => "Server Internal Error",
            StatusCode::ServiceUnavailable => "Service Unavailable",
            StatusCode::Decline => "Decline",
            StatusCode::Other(_) => "Unknown",
        }
    }

    /// 1xx
    pub fn is_provisional(&self) -> bool {
        (100..200).contains(&self.as_u16())
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.as_u16())
    }

    /// Anything that ends a transaction (>= 200)
    pub fn is_final(&self) -> bool {
        self.as_u16() >= 200
    }

    /// 3xx and above
    pub fn is_error(&self) -> bool {
        self.as_u16() >= 300
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(StatusCode::Ringing.is_provisional());
        assert!(!StatusCode::Ringing.is_final());
        assert!(StatusCode::Accepted.is_success());
        assert!(StatusCode::BusyHere.is_final());
        assert!(StatusCode::BusyHere.is_error());
        assert!(!StatusCode::BusyHere.is_success());
    }

    #[test]
    fn test_from_u16_bounds() {
        assert_eq!(StatusCode::from_u16(199).unwrap(), StatusCode::Other(199));
        assert_eq!(StatusCode::from_u16(481).unwrap(), StatusCode::CallOrTransactionDoesNotExist);
        assert_eq!(StatusCode::from_u16(99), Err(Error::InvalidStatusCode(99)));
        assert_eq!(StatusCode::from_u16(700), Err(Error::InvalidStatusCode(700)));
    }
}
