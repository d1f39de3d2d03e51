//! Probe contract.

/// Result of a single probe invocation.
///
/// A probe observes a remote condition once and classifies the result.
/// The classification is explicit: the poller retries [`Retryable`]
/// reports and aborts on [`Fatal`] ones, it never inspects reasons to
/// guess which is which.
///
/// [`Retryable`]: ProbeReport::Retryable
/// [`Fatal`]: ProbeReport::Fatal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeReport {
    /// The remote condition holds.
    Success,

    /// Transient condition, expected to clear with time (resource not
    /// yet in the desired state, API call transiently erroring).
    Retryable(String),

    /// Condition that cannot be fixed by waiting (malformed input,
    /// permanent API error).
    Fatal(String),
}

impl ProbeReport {
    /// Shorthand for a retryable failure with a reason.
    pub fn retryable(reason: impl Into<String>) -> Self {
        Self::Retryable(reason.into())
    }

    /// Shorthand for a fatal failure with a reason.
    pub fn fatal(reason: impl Into<String>) -> Self {
        Self::Fatal(reason.into())
    }

    /// Returns true if the probe observed the desired condition.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(
            ProbeReport::retryable("not ready"),
            ProbeReport::Retryable("not ready".to_string())
        );
        assert_eq!(
            ProbeReport::fatal("bad input"),
            ProbeReport::Fatal("bad input".to_string())
        );
        assert!(ProbeReport::Success.is_success());
        assert!(!ProbeReport::retryable("x").is_success());
    }
}
