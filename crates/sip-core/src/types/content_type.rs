//! # Content-Type header

use std::fmt;

use serde::{Deserialize, Serialize};

/// Typed Content-Type header, kept as the raw media type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentType(pub String);

impl ContentType {
    pub fn new(media_type: impl Into<String>) -> Self {
        Self(media_type.into())
    }

    /// `application/sdp`
    pub fn sdp() -> Self {
        Self::new("application/sdp")
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
