//! Commonly used types, for glob import

pub use crate::error::Error;
pub use crate::types::{
    Address, CSeq, CallId, Contact, ContentType, From, HeaderAccess, HeaderName, Method, Param,
    RecordRoute, RecordRouteEntry, Request, Response, Route, RouteEntry, Scheme, StatusCode,
    To, TypedHeader, Uri,
};

#[cfg(test)]
mod tests {
    use super::*;

    // The glob import must leave std's two-parameter Result usable
    fn lookup(uri: &str) -> Result<Uri, Error> {
        uri.parse()
    }

    #[test]
    fn test_glob_import_keeps_std_result() {
        assert!(lookup("sip:alice@atlanta.example.com").is_ok());
        assert!(lookup("alice").is_err());
    }
}
