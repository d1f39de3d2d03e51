//! # vigil-poller
//!
//! Bounded polling primitives for deployment verification.
//!
//! A poll session drives a caller-supplied probe of a remote condition
//! (a replica count, a target-group health summary, an HTTPS endpoint)
//! until the probe succeeds, reports a non-retryable failure, or the
//! attempt/time budget runs out, sleeping a fixed interval between
//! attempts.
//!
//! ## Design principles
//!
//! - Probes are idempotent observations; the poller may invoke them any
//!   number of times.
//! - The retryable/fatal distinction is an explicit classification made
//!   by the probe, never inferred by the poller.
//! - The poller never aborts the host process. Exhaustion and aborts
//!   surface in the [`PollOutcome`]; the caller decides whether that is
//!   a hard failure or a logged warning.
//! - Diagnostics hooks are logging-only. Their errors are swallowed and
//!   can never change the outcome of a session.
//! - A session future is cancel-safe: dropping it (for example via
//!   `tokio::time::timeout`) aborts the inter-attempt sleep promptly.
//!
//! ## Example
//!
//! ```no_run
//! use std::time::Duration;
//! use vigil_poller::{poll, PollPolicy, ProbeReport};
//!
//! # async fn example() -> Result<(), vigil_poller::PolicyError> {
//! let policy = PollPolicy::new(30, Duration::from_secs(10))?;
//! let outcome = poll(&policy, "ecs_service_running", || async {
//!     // describe the service, compare running count to desired count
//!     ProbeReport::retryable("0 of 2 tasks running")
//! })
//! .await;
//!
//! assert!(!outcome.succeeded());
//! # Ok(())
//! # }
//! ```

mod error;
mod outcome;
mod policy;
mod poller;
mod probe;

pub use error::{PolicyError, PollError};
pub use outcome::{PollOutcome, PollStatus};
pub use policy::PollPolicy;
pub use poller::{poll, poll_with_diagnostics};
pub use probe::ProbeReport;
