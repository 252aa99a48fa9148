//! # From header
//!
//! The initiator of a request. The From tag of an inbound INVITE is the remote
//! half of a UAS dialog identity.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::address::Address;

/// Typed From header
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct From(pub Address);

impl From {
    pub fn new(address: Address) -> Self {
        Self(address)
    }

    pub fn address(&self) -> &Address {
        &self.0
    }

    pub fn tag(&self) -> Option<&str> {
        self.0.tag()
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.0.set_tag(tag);
        self
    }
}

impl Deref for From {
    type Target = Address;

    fn deref(&self) -> &Address {
        &self.0
    }
}

impl fmt::Display for From {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for From {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Address::from_str(s).map(Self)
    }
}
