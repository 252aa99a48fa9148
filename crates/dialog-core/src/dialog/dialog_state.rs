//! Dialog state definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a UAS dialog
///
/// States are totally ordered; a dialog only moves forward and `Ended` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DialogState {
    /// INVITE received, no final 2xx sent yet
    Init = 0,
    /// 2xx sent, waiting for ACK
    Established = 1,
    /// ACK received
    Confirmed = 2,
    /// Dialog is over
    Ended = 3,
}

impl DialogState {
    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => DialogState::Init,
            1 => DialogState::Established,
            2 => DialogState::Confirmed,
            _ => DialogState::Ended,
        }
    }
}

impl fmt::Display for DialogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogState::Init => write!(f, "Init"),
            DialogState::Established => write!(f, "Established"),
            DialogState::Confirmed => write!(f, "Confirmed"),
            DialogState::Ended => write!(f, "Ended"),
        }
    }
}
