//! # Record-Route header
//!
//! Proxies that want to stay on the signaling path of a dialog insert a
//! Record-Route entry into the initial request
//! ([RFC 3261 Section 20.30](https://datatracker.ietf.org/doc/html/rfc3261#section-20.30)).
//! A UAS turns the collected entries into the Route set of its own in-dialog
//! requests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::{parse_address_list, parse_complete};
use crate::types::address::Address;
use crate::types::uri::Uri;

/// A single record-route entry (name-addr with optional parameters)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordRouteEntry(pub Address);

impl RecordRouteEntry {
    pub fn new(address: Address) -> Self {
        Self(address)
    }

    pub fn uri(&self) -> &Uri {
        &self.0.uri
    }

    pub fn address(&self) -> &Address {
        &self.0
    }

    /// Checks if this entry uses loose routing (`lr` on the URI)
    pub fn is_loose_routing(&self) -> bool {
        self.0.uri.is_loose_routing()
    }
}

impl fmt::Display for RecordRouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RecordRouteEntry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Address::from_str(s).map(Self)
    }
}

/// Typed Record-Route header: one or more comma-separated entries
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordRoute(pub Vec<RecordRouteEntry>);

impl RecordRoute {
    pub fn new(entries: Vec<RecordRouteEntry>) -> Self {
        Self(entries)
    }

    pub fn single(entry: RecordRouteEntry) -> Self {
        Self(vec![entry])
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordRouteEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RecordRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&entries.join(", "))
    }
}

impl FromStr for RecordRoute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_complete(s, parse_address_list)
            .map(|entries| Self(entries.into_iter().map(RecordRouteEntry).collect()))
            .ok_or_else(|| Error::InvalidAddress(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multi_entry_header() {
        let rr: RecordRoute = "<sip:p1.example.com;lr>, <sip:p2.example.com;lr>"
            .parse()
            .unwrap();
        assert_eq!(rr.len(), 2);
        assert_eq!(rr.0[1].uri().host, "p2.example.com");
        assert!(rr.iter().all(RecordRouteEntry::is_loose_routing));
    }

    #[test]
    fn test_comma_inside_display_name() {
        let rr: RecordRoute = "\"Edge, West\" <sip:p1.example.com;lr>, <sip:p2.example.com;lr>"
            .parse()
            .unwrap();
        assert_eq!(rr.len(), 2);
        assert_eq!(rr.0[0].address().display_name.as_deref(), Some("Edge, West"));
    }

    #[test]
    fn test_strict_route_entry() {
        let entry: RecordRouteEntry = "<sip:strict.example.com>".parse().unwrap();
        assert!(!entry.is_loose_routing());
    }
}
