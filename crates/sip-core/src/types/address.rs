//! # Name-addr values
//!
//! The `[display-name] <uri>;params` form shared by From, To, Contact, Route and
//! Record-Route. Header parameters such as `tag` live on the [`Address`], not on
//! its URI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::{parse_address, parse_complete};
use crate::types::param::{write_params, Param};
use crate::types::uri::Uri;

/// A name-addr or addr-spec with header parameters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    /// Optional display name, stored unquoted
    pub display_name: Option<String>,
    /// The address URI
    pub uri: Uri,
    /// Header parameters following the URI
    pub params: Vec<Param>,
}

impl Address {
    pub fn new(uri: Uri) -> Self {
        Address {
            display_name: None,
            uri,
            params: Vec::new(),
        }
    }

    pub fn new_with_display_name(display_name: impl Into<String>, uri: Uri) -> Self {
        Address {
            display_name: Some(display_name.into()),
            uri,
            params: Vec::new(),
        }
    }

    /// The `tag` header parameter, if present
    pub fn tag(&self) -> Option<&str> {
        self.params.iter().find_map(Param::tag_value)
    }

    /// Replace (or add) the `tag` header parameter
    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.params.retain(|p| !matches!(p, Param::Tag(_)));
        self.params.push(Param::Tag(tag.into()));
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.set_tag(tag);
        self
    }

    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Check for a header parameter by (case-insensitive) name
    pub fn has_param(&self, name: &str) -> bool {
        self.params.iter().any(|p| p.key().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.display_name {
            Some(name) => write!(
                f,
                "\"{}\" <{}>",
                name.replace('\\', "\\\\").replace('"', "\\\""),
                self.uri
            )?,
            None => write!(f, "<{}>", self.uri)?,
        }
        write_params(f, &self.params)
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_complete(s, parse_address).ok_or_else(|| Error::InvalidAddress(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_addr_with_tag() {
        let addr: Address = "\"Alice\" <sip:alice@atlanta.example.com>;tag=1928301774"
            .parse()
            .unwrap();
        assert_eq!(addr.display_name.as_deref(), Some("Alice"));
        assert_eq!(addr.uri.username(), Some("alice"));
        assert_eq!(addr.tag(), Some("1928301774"));
    }

    #[test]
    fn test_uri_params_stay_inside_brackets() {
        let addr: Address = "<sip:p1.example.com;lr>".parse().unwrap();
        assert!(addr.uri.is_loose_routing());
        assert!(addr.params.is_empty());
    }

    #[test]
    fn test_bare_addr_spec_params_are_header_params() {
        let addr: Address = "sip:bob@biloxi.example.com;tag=a6c85cf".parse().unwrap();
        assert_eq!(addr.tag(), Some("a6c85cf"));
        assert!(addr.uri.parameters.is_empty());
    }

    #[test]
    fn test_display_name_round_trip() {
        let text = r#""Bob \"the <boss>\"" <sip:bob@biloxi.example.com>;tag=1"#;
        let addr: Address = text.parse().unwrap();
        assert_eq!(addr.display_name.as_deref(), Some(r#"Bob "the <boss>""#));
        assert_eq!(addr.to_string(), text);
        assert_eq!(addr.to_string().parse::<Address>().unwrap(), addr);
    }

    #[test]
    fn test_rejects_unterminated_name_addr() {
        assert!("\"Alice\" <sip:alice@atlanta.example.com".parse::<Address>().is_err());
        assert!("<sip:alice@atlanta.example.com> trailing".parse::<Address>().is_err());
    }

    #[test]
    fn test_set_tag_replaces_existing() {
        let mut addr = Address::new(Uri::sip("example.com")).with_tag("one");
        addr.set_tag("two");
        assert_eq!(addr.tag(), Some("two"));
        assert_eq!(addr.to_string(), "<sip:example.com>;tag=two");
    }
}
