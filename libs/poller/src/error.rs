//! Error types for poll sessions.

use thiserror::Error;

/// Errors from constructing a [`PollPolicy`](crate::PollPolicy).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// A policy must allow at least one attempt.
    #[error("max_attempts must be at least 1")]
    ZeroAttempts,

    /// The inter-attempt interval must be positive.
    #[error("interval must be greater than zero")]
    ZeroInterval,
}

/// Terminal failure of a poll session, for callers that want a `Result`
/// instead of inspecting the outcome.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PollError {
    /// The probe reported a non-retryable failure.
    #[error("aborted after {attempts} attempt(s): {reason}")]
    Aborted { attempts: u32, reason: String },

    /// The attempt or time budget ran out while the condition still did
    /// not hold.
    #[error("exhausted after {attempts} attempt(s), last reason: {last_reason}")]
    Exhausted { attempts: u32, last_reason: String },
}
