//! # SIP Parameters
//!
//! Parameters attached to URIs and header values (`;key=value` or `;flag`).
//! The parameters the dialog layer cares about (`tag`, `branch`, `lr`,
//! `transport`) have dedicated variants; everything else is kept verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single SIP parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Param {
    /// `tag=` on From/To, one half of the dialog identity
    Tag(String),
    /// `branch=` on Via
    Branch(String),
    /// `lr` loose-routing flag on Route/Record-Route URIs
    Lr,
    /// `transport=` URI parameter
    Transport(String),
    /// Any other parameter, flag-style when the value is `None`
    Other(String, Option<String>),
}

impl Param {
    /// Create a tag parameter
    pub fn tag(tag: impl Into<String>) -> Self {
        Param::Tag(tag.into())
    }

    /// Create a branch parameter
    pub fn branch(branch: impl Into<String>) -> Self {
        Param::Branch(branch.into())
    }

    /// Create a transport parameter
    pub fn transport(transport: impl Into<String>) -> Self {
        Param::Transport(transport.into())
    }

    /// Create a parameter from a key and optional value, recognising well-known keys
    pub fn new(key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        let key = key.into();
        let value = value.map(Into::into);
        match (key.to_ascii_lowercase().as_str(), value) {
            ("tag", Some(v)) => Param::Tag(v),
            ("branch", Some(v)) => Param::Branch(v),
            ("transport", Some(v)) => Param::Transport(v),
            ("lr", None) => Param::Lr,
            (_, value) => Param::Other(key, value),
        }
    }

    /// Parameter name
    pub fn key(&self) -> &str {
        match self {
            Param::Tag(_) => "tag",
            Param::Branch(_) => "branch",
            Param::Lr => "lr",
            Param::Transport(_) => "transport",
            Param::Other(key, _) => key,
        }
    }

    /// Parameter value, `None` for flags
    pub fn value(&self) -> Option<&str> {
        match self {
            Param::Tag(v) | Param::Branch(v) | Param::Transport(v) => Some(v),
            Param::Lr => None,
            Param::Other(_, v) => v.as_deref(),
        }
    }

    /// Value if this is a tag parameter
    pub fn tag_value(&self) -> Option<&str> {
        match self {
            Param::Tag(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{}={}", self.key(), value),
            None => f.write_str(self.key()),
        }
    }
}

/// Write a parameter list as `;a=b;c`
pub(crate) fn write_params(f: &mut fmt::Formatter<'_>, params: &[Param]) -> fmt::Result {
    for param in params {
        write!(f, ";{}", param)?;
    }
    Ok(())
}
