//! Exact-match count targets.

use vigil_poller::ProbeReport;

/// A count a deployment must reach exactly.
///
/// Only `observed == target` satisfies the target. Overshoot is not
/// success: three running tasks against a desired count of two keeps
/// the probe in a retryable state, the same as one running task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredCount {
    subject: String,
    target: u64,
}

impl DesiredCount {
    /// Create a target. `subject` names what is being counted and only
    /// appears in failure reasons ("running tasks", "healthy targets").
    pub fn new(subject: impl Into<String>, target: u64) -> Self {
        Self {
            subject: subject.into(),
            target,
        }
    }

    /// The target count.
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Compare an observation against the target.
    pub fn evaluate(&self, observed: u64) -> ProbeReport {
        if observed == self.target {
            ProbeReport::Success
        } else {
            ProbeReport::retryable(format!(
                "{}: observed {}, want exactly {}",
                self.subject, observed, self.target
            ))
        }
    }
}
