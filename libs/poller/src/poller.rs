//! The bounded poll loop.

use std::convert::Infallible;
use std::fmt;
use std::future::Future;

use tokio::time::Instant;
use tracing::{error, info, warn};

use crate::outcome::{PollOutcome, PollStatus};
use crate::policy::PollPolicy;
use crate::probe::ProbeReport;

/// Drive a probe to completion under a policy.
///
/// Invokes the probe up to `policy.max_attempts()` times, sleeping
/// `policy.interval()` between attempts. There is no sleep after a
/// success, a fatal report, or the final attempt.
///
/// `probe_name` only labels log lines and has no effect on control
/// flow.
pub async fn poll<F, Fut>(policy: &PollPolicy, probe_name: &str, probe: F) -> PollOutcome
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ProbeReport>,
{
    poll_with_diagnostics(policy, probe_name, probe, |_attempt: u32| async {
        Ok::<(), Infallible>(())
    })
    .await
}

/// [`poll`], with a diagnostics hook.
///
/// When a retryable failure lands on the first attempt whose index
/// exceeds `policy.diagnostic_threshold()`, the hook runs exactly once
/// for the session, before the next sleep. It receives the current
/// attempt index. Hook errors are logged and swallowed; the hook cannot
/// change the outcome of the session.
pub async fn poll_with_diagnostics<F, Fut, D, DFut, E>(
    policy: &PollPolicy,
    probe_name: &str,
    mut probe: F,
    mut diagnostics: D,
) -> PollOutcome
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ProbeReport>,
    D: FnMut(u32) -> DFut,
    DFut: Future<Output = Result<(), E>>,
    E: fmt::Display,
{
    let start = Instant::now();
    let mut last_reason: Option<String> = None;
    let mut diagnostics_fired = false;
    let mut attempts = 0;

    for attempt in 1..=policy.max_attempts() {
        attempts = attempt;

        match probe().await {
            ProbeReport::Success => {
                info!(probe = probe_name, attempt, "probe succeeded");
                return PollOutcome {
                    status: PollStatus::Succeeded,
                    attempts,
                    last_reason,
                    elapsed: start.elapsed(),
                };
            }
            ProbeReport::Fatal(reason) => {
                error!(
                    probe = probe_name,
                    attempt,
                    reason = %reason,
                    "probe reported a non-retryable failure, aborting"
                );
                return PollOutcome {
                    status: PollStatus::Aborted,
                    attempts,
                    last_reason: Some(reason),
                    elapsed: start.elapsed(),
                };
            }
            ProbeReport::Retryable(reason) => {
                warn!(
                    probe = probe_name,
                    attempt,
                    max_attempts = policy.max_attempts(),
                    reason = %reason,
                    "probe not satisfied"
                );
                last_reason = Some(reason);
            }
        }

        if let Some(threshold) = policy.diagnostic_threshold() {
            if !diagnostics_fired && attempt > threshold {
                diagnostics_fired = true;
                if let Err(e) = diagnostics(attempt).await {
                    warn!(
                        probe = probe_name,
                        attempt,
                        error = %e,
                        "diagnostics hook failed"
                    );
                }
            }
        }

        if attempt == policy.max_attempts() {
            break;
        }

        if let Some(deadline) = policy.deadline() {
            if start.elapsed() >= deadline {
                warn!(
                    probe = probe_name,
                    attempt,
                    deadline_secs = deadline.as_secs(),
                    "deadline reached before attempt budget"
                );
                break;
            }
        }

        tokio::time::sleep(policy.interval()).await;
    }

    let elapsed = start.elapsed();
    error!(
        probe = probe_name,
        attempts,
        elapsed_secs = elapsed.as_secs(),
        last_reason = last_reason.as_deref().unwrap_or("unspecified"),
        "probe did not succeed within budget"
    );
    PollOutcome {
        status: PollStatus::Exhausted,
        attempts,
        last_reason,
        elapsed,
    }
}
