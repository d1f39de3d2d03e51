//! # vigil-probes
//!
//! Concrete probes for deployment verification, built on the
//! [`vigil_poller`] probe contract:
//!
//! - [`HttpHealthProbe`]: GET a health endpoint and expect 200 OK, with
//!   an insecure-TLS option for self-signed test certificates.
//! - [`DesiredCount`]: compare an observed replica/target count against
//!   an exact target.
//!
//! Cloud control-plane describe calls (ECS services, target groups,
//! Cloud Run revisions) stay outside this crate; wrap their results in
//! a closure that feeds [`DesiredCount::evaluate`].

mod count;
mod http;

pub use count::DesiredCount;
pub use http::{HttpHealthProbe, HttpProbeConfig, ProbeBuildError};
