//! Terminal result of a poll session.

use std::time::Duration;

use crate::error::PollError;

/// Terminal state of a poll session.
///
/// `Idle → Attempting → {Succeeded | Exhausted | Aborted}`; the three
/// terminal states have no outgoing transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStatus {
    /// The probe observed the desired condition.
    Succeeded,

    /// The attempt or time budget ran out while the probe kept
    /// reporting retryable failures.
    Exhausted,

    /// The probe reported a non-retryable failure.
    Aborted,
}

/// Outcome of a poll session, produced once and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOutcome {
    /// How the session ended.
    pub status: PollStatus,

    /// Number of probe invocations actually made.
    pub attempts: u32,

    /// Reason attached to the last failing report, if any.
    pub last_reason: Option<String>,

    /// Wall clock from the first invocation to return.
    pub elapsed: Duration,
}

impl PollOutcome {
    /// Returns true if the session ended in [`PollStatus::Succeeded`].
    pub fn succeeded(&self) -> bool {
        self.status == PollStatus::Succeeded
    }

    /// Convert into a `Result` for callers that treat a failed session
    /// as a hard error.
    pub fn into_result(self) -> Result<(), PollError> {
        match self.status {
            PollStatus::Succeeded => Ok(()),
            PollStatus::Aborted => Err(PollError::Aborted {
                attempts: self.attempts,
                reason: self.last_reason.unwrap_or_else(|| "unspecified".to_string()),
            }),
            PollStatus::Exhausted => Err(PollError::Exhausted {
                attempts: self.attempts,
                last_reason: self.last_reason.unwrap_or_else(|| "unspecified".to_string()),
            }),
        }
    }
}
