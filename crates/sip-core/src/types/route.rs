//! # Route header
//!
//! The route set a request must traverse. The first entry, when present, is the
//! next hop a transport should send to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::{parse_address_list, parse_complete};
use crate::types::address::Address;
use crate::types::uri::Uri;

/// A single route entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteEntry(pub Address);

impl RouteEntry {
    pub fn new(address: Address) -> Self {
        Self(address)
    }

    pub fn uri(&self) -> &Uri {
        &self.0.uri
    }

    pub fn address(&self) -> &Address {
        &self.0
    }
}

impl fmt::Display for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RouteEntry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Address::from_str(s).map(Self)
    }
}

/// Typed Route header
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route(pub Vec<RouteEntry>);

impl Route {
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        Self(entries)
    }

    pub fn single(entry: RouteEntry) -> Self {
        Self(vec![entry])
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.0.iter()
    }

    pub fn first(&self) -> Option<&RouteEntry> {
        self.0.first()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&entries.join(", "))
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_complete(s, parse_address_list)
            .map(|entries| Self(entries.into_iter().map(RouteEntry).collect()))
            .ok_or_else(|| Error::InvalidAddress(s.trim().to_string()))
    }
}
