//! RFC 3261 timer values used by the dialog layer
//!
//! The UAS dialog core runs no transaction timers itself. It only needs T1 to
//! pace the ACK wait that precedes a locally initiated BYE (RFC 3261 Section 15:
//! the callee must not send BYE until the ACK arrives or the INVITE server
//! transaction times out). The remaining values are exposed so applications and
//! test doubles can stay consistent with the transaction layer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Standard SIP timer durations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    /// **T1: Round-Trip Time (RTT) Estimate (Default: 500 ms)**
    /// Initial retransmission interval; also the ACK re-check interval before BYE.
    pub t1: Duration,

    /// **T2: Maximum Retransmission Interval (Default: 4 seconds)**
    pub t2: Duration,

    /// **T4: Maximum Message Lifetime (Default: 5 seconds)**
    pub t4: Duration,

    /// **Transaction Timeout (Default: 32 seconds, i.e., 64 * T1)**
    /// Timer B for INVITE, Timer F for non-INVITE client transactions.
    pub transaction_timeout: Duration,
}

impl TimerSettings {
    /// Settings derived from a custom T1, keeping the RFC ratios
    pub fn with_t1(t1: Duration) -> Self {
        Self {
            t1,
            transaction_timeout: t1 * 64,
            ..Self::default()
        }
    }

    /// Timer B: INVITE client transaction timeout (64 * T1)
    pub fn timer_b(&self) -> Duration {
        self.t1 * 64
    }
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            t1: Duration::from_millis(500),
            t2: Duration::from_secs(4),
            t4: Duration::from_secs(5),
            transaction_timeout: Duration::from_secs(32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc_defaults() {
        let timers = TimerSettings::default();
        assert_eq!(timers.t1, Duration::from_millis(500));
        assert_eq!(timers.timer_b(), Duration::from_secs(32));
        assert_eq!(timers.transaction_timeout, timers.timer_b());
    }

    #[test]
    fn test_custom_t1_scales_timeout() {
        let timers = TimerSettings::with_t1(Duration::from_millis(100));
        assert_eq!(timers.transaction_timeout, Duration::from_millis(6400));
        assert_eq!(timers.t2, Duration::from_secs(4));
    }
}
