//! Poll session policy.

use std::time::Duration;

use crate::error::PolicyError;

/// Attempt count, interval, and optional diagnostics threshold and
/// deadline governing one poll session.
///
/// A policy is constructed once per verification phase (service
/// running, targets healthy, endpoint serving 200) and discarded after
/// the session returns its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollPolicy {
    max_attempts: u32,
    interval: Duration,
    diagnostic_threshold: Option<u32>,
    deadline: Option<Duration>,
}

impl PollPolicy {
    /// Create a policy with the given attempt budget and inter-attempt
    /// interval.
    ///
    /// Fails if `max_attempts` is zero or `interval` is zero.
    pub fn new(max_attempts: u32, interval: Duration) -> Result<Self, PolicyError> {
        if max_attempts == 0 {
            return Err(PolicyError::ZeroAttempts);
        }
        if interval.is_zero() {
            return Err(PolicyError::ZeroInterval);
        }

        Ok(Self {
            max_attempts,
            interval,
            diagnostic_threshold: None,
            deadline: None,
        })
    }

    /// Run the diagnostics hook once the attempt index exceeds
    /// `threshold` and the probe is still failing.
    pub fn with_diagnostic_threshold(mut self, threshold: u32) -> Self {
        self.diagnostic_threshold = Some(threshold);
        self
    }

    /// Bound the whole session by wall-clock time in addition to the
    /// attempt budget. Once `deadline` has elapsed after a retryable
    /// failure, the session ends exhausted without consuming the
    /// remaining attempts.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Maximum number of probe invocations.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Sleep between attempts.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Attempt index after which diagnostics run, if configured.
    pub fn diagnostic_threshold(&self) -> Option<u32> {
        self.diagnostic_threshold
    }

    /// Overall wall-clock budget, if configured.
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }
}
