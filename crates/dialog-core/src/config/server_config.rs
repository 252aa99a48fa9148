//! Dialog server configuration
//!
//! ## Examples
//!
//! ```rust
//! use std::time::Duration;
//! use uas_dialog_core::config::DialogServerConfig;
//!
//! let config = DialogServerConfig::new("<sip:uas@192.0.2.10:5060>".parse().unwrap())
//!     .with_confirmation_retry_interval(Duration::from_millis(250))
//!     .with_state_channel_capacity(8);
//!
//! assert!(config.validate().is_ok());
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use uas_sip_core::Contact;

use crate::errors::{DialogError, DialogResult};
use crate::transaction::TimerSettings;

/// Default buffer of each dialog's state-change channel
pub const DEFAULT_STATE_CHANNEL_CAPACITY: usize = 3;

/// Configuration of a [`DialogServer`](crate::server::DialogServer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogServerConfig {
    /// Contact header appended to every response sent on an INVITE
    ///
    /// The peer sends in-dialog requests (ACK, BYE) to this address.
    pub contact: Contact,

    /// How often the ACK wait before a local BYE re-checks the dialog state (T1)
    pub confirmation_retry_interval: Duration,

    /// Buffer size of each dialog's state-change channel
    pub state_channel_capacity: usize,
}

impl DialogServerConfig {
    /// Configuration with RFC 3261 defaults for the given contact
    pub fn new(contact: Contact) -> Self {
        Self {
            contact,
            confirmation_retry_interval: TimerSettings::default().t1,
            state_channel_capacity: DEFAULT_STATE_CHANNEL_CAPACITY,
        }
    }

    pub fn with_confirmation_retry_interval(mut self, interval: Duration) -> Self {
        self.confirmation_retry_interval = interval;
        self
    }

    pub fn with_state_channel_capacity(mut self, capacity: usize) -> Self {
        self.state_channel_capacity = capacity;
        self
    }

    /// Take the retry interval from the transaction layer's timers
    pub fn with_timers(self, timers: &TimerSettings) -> Self {
        self.with_confirmation_retry_interval(timers.t1)
    }

    /// Validate the configuration
    pub fn validate(&self) -> DialogResult<()> {
        if self.confirmation_retry_interval.is_zero() {
            return Err(DialogError::configuration(
                "confirmation_retry_interval must be greater than zero",
            ));
        }
        if self.state_channel_capacity == 0 {
            return Err(DialogError::configuration(
                "state_channel_capacity must be greater than zero",
            ));
        }
        Ok(())
    }
}
