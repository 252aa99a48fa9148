//! # Typed headers
//!
//! [`TypedHeader`] holds the headers the dialog layer reads or writes in typed
//! form; anything else travels as [`TypedHeader::Other`] with its raw value.
//! [`HeaderAccess`] gives requests and responses the same typed accessors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::call_id::CallId;
use crate::types::contact::Contact;
use crate::types::content_type::ContentType;
use crate::types::cseq::CSeq;
use crate::types::from::From;
use crate::types::record_route::{RecordRoute, RecordRouteEntry};
use crate::types::route::{Route, RouteEntry};
use crate::types::to::To;

/// Header names known to the dialog layer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderName {
    Via,
    From,
    To,
    CallId,
    CSeq,
    Contact,
    RecordRoute,
    Route,
    ContentType,
    MaxForwards,
    /// Any other header, by its name as written
    Other(String),
}

impl HeaderName {
    pub fn as_str(&self) -> &str {
        match self {
            HeaderName::Via => "Via",
            HeaderName::From => "From",
            HeaderName::To => "To",
            HeaderName::CallId => "Call-ID",
            HeaderName::CSeq => "CSeq",
            HeaderName::Contact => "Contact",
            HeaderName::RecordRoute => "Record-Route",
            HeaderName::Route => "Route",
            HeaderName::ContentType => "Content-Type",
            HeaderName::MaxForwards => "Max-Forwards",
            HeaderName::Other(name) => name,
        }
    }

    /// Map a header name (case-insensitive, compact forms included) to a known name
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "via" | "v" => HeaderName::Via,
            "from" | "f" => HeaderName::From,
            "to" | "t" => HeaderName::To,
            "call-id" | "i" => HeaderName::CallId,
            "cseq" => HeaderName::CSeq,
            "contact" | "m" => HeaderName::Contact,
            "record-route" => HeaderName::RecordRoute,
            "route" => HeaderName::Route,
            "content-type" | "c" => HeaderName::ContentType,
            "max-forwards" => HeaderName::MaxForwards,
            _ => HeaderName::Other(name.to_string()),
        }
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A SIP header in typed form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypedHeader {
    From(From),
    To(To),
    CallId(CallId),
    CSeq(CSeq),
    Contact(Contact),
    RecordRoute(RecordRoute),
    Route(Route),
    ContentType(ContentType),
    /// Untyped header (Via, Max-Forwards, extensions)
    Other(HeaderName, String),
}

impl TypedHeader {
    /// Create an untyped header from a name and raw value
    pub fn other(name: &str, value: impl Into<String>) -> Self {
        TypedHeader::Other(HeaderName::from_name(name), value.into())
    }

    pub fn name(&self) -> HeaderName {
        match self {
            TypedHeader::From(_) => HeaderName::From,
            TypedHeader::To(_) => HeaderName::To,
            TypedHeader::CallId(_) => HeaderName::CallId,
            TypedHeader::CSeq(_) => HeaderName::CSeq,
            TypedHeader::Contact(_) => HeaderName::Contact,
            TypedHeader::RecordRoute(_) => HeaderName::RecordRoute,
            TypedHeader::Route(_) => HeaderName::Route,
            TypedHeader::ContentType(_) => HeaderName::ContentType,
            TypedHeader::Other(name, _) => name.clone(),
        }
    }
}

impl fmt::Display for TypedHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name())?;
        match self {
            TypedHeader::From(h) => h.fmt(f),
            TypedHeader::To(h) => h.fmt(f),
            TypedHeader::CallId(h) => h.fmt(f),
            TypedHeader::CSeq(h) => h.fmt(f),
            TypedHeader::Contact(h) => h.fmt(f),
            TypedHeader::RecordRoute(h) => h.fmt(f),
            TypedHeader::Route(h) => h.fmt(f),
            TypedHeader::ContentType(h) => h.fmt(f),
            TypedHeader::Other(_, value) => f.write_str(value),
        }
    }
}

/// Typed header accessors shared by requests and responses
pub trait HeaderAccess {
    /// All headers in message order
    fn headers(&self) -> &[TypedHeader];

    /// First header with the given name
    fn header(&self, name: &HeaderName) -> Option<&TypedHeader> {
        self.headers().iter().find(|h| &h.name() == name)
    }

    /// All headers with the given name, in message order
    fn headers_named<'a>(&'a self, name: &'a HeaderName) -> Box<dyn Iterator<Item = &'a TypedHeader> + 'a> {
        Box::new(self.headers().iter().filter(move |h| &h.name() == name))
    }

    fn from(&self) -> Option<&From> {
        self.headers().iter().find_map(|h| match h {
            TypedHeader::From(from) => Some(from),
            _ => None,
        })
    }

    fn to(&self) -> Option<&To> {
        self.headers().iter().find_map(|h| match h {
            TypedHeader::To(to) => Some(to),
            _ => None,
        })
    }

    fn call_id(&self) -> Option<&CallId> {
        self.headers().iter().find_map(|h| match h {
            TypedHeader::CallId(call_id) => Some(call_id),
            _ => None,
        })
    }

    fn cseq(&self) -> Option<&CSeq> {
        self.headers().iter().find_map(|h| match h {
            TypedHeader::CSeq(cseq) => Some(cseq),
            _ => None,
        })
    }

    fn contact(&self) -> Option<&Contact> {
        self.headers().iter().find_map(|h| match h {
            TypedHeader::Contact(contact) => Some(contact),
            _ => None,
        })
    }

    fn content_type(&self) -> Option<&ContentType> {
        self.headers().iter().find_map(|h| match h {
            TypedHeader::ContentType(ct) => Some(ct),
            _ => None,
        })
    }

    /// Every Record-Route entry across all Record-Route headers, in received order
    fn record_routes(&self) -> Vec<&RecordRouteEntry> {
        self.headers()
            .iter()
            .filter_map(|h| match h {
                TypedHeader::RecordRoute(rr) => Some(rr.iter()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    /// Every Route entry across all Route headers, in message order
    fn routes(&self) -> Vec<&RouteEntry> {
        self.headers()
            .iter()
            .filter_map(|h| match h {
                TypedHeader::Route(route) => Some(route.iter()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    /// The topmost Route entry, i.e. the next hop
    fn first_route(&self) -> Option<&RouteEntry> {
        self.headers().iter().find_map(|h| match h {
            TypedHeader::Route(route) => route.first(),
            _ => None,
        })
    }
}
