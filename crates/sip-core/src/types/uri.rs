//! # SIP URIs
//!
//! `sip:`, `sips:` and `tel:` URIs as used in Request-URIs, Contact, From/To and
//! Route headers ([RFC 3261 Section 19.1](https://datatracker.ietf.org/doc/html/rfc3261#section-19.1)).
//!
//! ```rust
//! use uas_sip_core::{Uri, Param};
//!
//! let uri: Uri = "sip:bob@biloxi.example.com:5062;transport=tcp".parse().unwrap();
//! assert_eq!(uri.username(), Some("bob"));
//! assert_eq!(uri.host_port(), "biloxi.example.com:5062");
//! assert_eq!(uri.transport(), Some("tcp"));
//!
//! let proxy = Uri::sip("proxy.example.com").with_parameter(Param::Lr);
//! assert!(proxy.is_loose_routing());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::{parse_complete, parse_uri};
use crate::types::param::{write_params, Param};

/// URI scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scheme {
    Sip,
    Sips,
    Tel,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Sip => "sip",
            Scheme::Sips => "sips",
            Scheme::Tel => "tel",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A SIP URI
///
/// For `tel:` URIs the subscriber number is stored in `host`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Uri {
    /// URI scheme (sip, sips, tel)
    pub scheme: Scheme,
    /// User part (optional)
    pub user: Option<String>,
    /// Host, IPv6 references keep their brackets
    pub host: String,
    /// Port (optional)
    pub port: Option<u16>,
    /// URI parameters (;key=value or ;key)
    pub parameters: Vec<Param>,
}

impl Uri {
    /// Create a new URI with the minimum required fields
    pub fn new(scheme: Scheme, host: impl Into<String>) -> Self {
        Uri {
            scheme,
            user: None,
            host: host.into(),
            port: None,
            parameters: Vec::new(),
        }
    }

    /// Create a `sip:` URI for a host
    pub fn sip(host: impl Into<String>) -> Self {
        Self::new(Scheme::Sip, host)
    }

    /// Create a `sips:` URI for a host
    pub fn sips(host: impl Into<String>) -> Self {
        Self::new(Scheme::Sips, host)
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_parameter(mut self, param: Param) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// `host` or `host:port`, the form a transport resolves
    pub fn host_port(&self) -> String {
        match self.port {
            Some(port) => format!("{}:{}", self.host, port),
            None => self.host.clone(),
        }
    }

    /// Check for a URI parameter by (case-insensitive) name
    pub fn has_param(&self, name: &str) -> bool {
        self.parameters.iter().any(|p| p.key().eq_ignore_ascii_case(name))
    }

    /// Value of the `transport` parameter, if any
    pub fn transport(&self) -> Option<&str> {
        self.parameters.iter().find_map(|p| match p {
            Param::Transport(t) => Some(t.as_str()),
            _ => None,
        })
    }

    /// Whether the URI carries the `lr` flag
    pub fn is_loose_routing(&self) -> bool {
        self.has_param("lr")
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.scheme)?;
        if let Some(user) = &self.user {
            write!(f, "{}@", user)?;
        }
        write!(f, "{}", self.host_port())?;
        write_params(f, &self.parameters)
    }
}

impl FromStr for Uri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_complete(s, parse_uri).ok_or_else(|| Error::InvalidUri(s.trim().to_string()))
    }
}
