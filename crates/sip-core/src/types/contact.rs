//! # Contact header
//!
//! In an INVITE the Contact is the peer's reachable address and becomes the
//! Request-URI of in-dialog requests; in a response it advertises ours.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::address::Address;
use crate::types::uri::Uri;

/// Typed Contact header (single value)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact(pub Address);

impl Contact {
    pub fn new(address: Address) -> Self {
        Self(address)
    }

    pub fn address(&self) -> &Address {
        &self.0
    }

    pub fn uri(&self) -> &Uri {
        &self.0.uri
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Contact {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Address::from_str(s).map(Self)
    }
}
