//! End-to-end deployment verification flow.
//!
//! Replays the phases a real verification run goes through, against a
//! local mock endpoint instead of a cloud control plane:
//!
//! 1. Read run parameters from an environment snapshot
//! 2. Poll a simulated service until it reaches the desired replica count
//! 3. Poll the health endpoint until it serves 200 OK
//! 4. On a stuck rollout, fire diagnostics once and report exhaustion
//!
//! ## Running
//!
//! ```bash
//! cargo test -p vigil-e2e --test verify_deployment
//! ```

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::warn;
use vigil_config::{AwsParams, Env};
use vigil_poller::{poll, poll_with_diagnostics, PollPolicy, PollStatus};
use vigil_probes::{DesiredCount, HttpHealthProbe, HttpProbeConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_test_writer()
        .try_init();
}

fn run_env() -> Env {
    Env::from_pairs([
        ("TEST_VPC_ID", "vpc-e2e"),
        ("TEST_PRIVATE_SUBNET_IDS", "subnet-a,subnet-b"),
        ("TEST_PUBLIC_SUBNET_IDS", "subnet-c,subnet-d"),
        ("TEST_TENANT_ID", "tenant-e2e"),
        ("TEST_DESIRED_COUNT", "2"),
    ])
}

#[tokio::test]
async fn test_service_reaches_desired_count() {
    init_tracing();

    let params = AwsParams::from_env(&run_env()).expect("run parameters");
    assert_eq!(params.desired_count, 2);

    // Simulated control plane: one more task comes up per describe call.
    let running = Arc::new(AtomicU64::new(0));
    let desired = DesiredCount::new("running tasks", params.desired_count);

    let policy = PollPolicy::new(10, Duration::from_millis(10)).unwrap();
    let outcome = poll(&policy, "ecs_service_running", || {
        let running = running.clone();
        let desired = desired.clone();
        async move { desired.evaluate(running.fetch_add(1, Ordering::SeqCst)) }
    })
    .await;

    assert!(outcome.succeeded());
    assert_eq!(outcome.attempts, 3);
    outcome.into_result().expect("service should be running");
}

#[tokio::test]
async fn test_health_endpoint_becomes_ready() {
    init_tracing();

    let server = MockServer::start().await;

    // The endpoint 503s while the service warms up, then serves 200.
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut config = HttpProbeConfig::new(format!("{}/ok", server.uri()));
    config.timeout = Duration::from_secs(2);
    let probe = HttpHealthProbe::new(config).unwrap();

    let policy = PollPolicy::new(10, Duration::from_millis(25)).unwrap();
    let outcome = poll(&policy, "https_health_check", || {
        let probe = probe.clone();
        async move { probe.check().await }
    })
    .await;

    assert!(outcome.succeeded());
    assert_eq!(outcome.attempts, 3);
}

#[tokio::test]
async fn test_stuck_rollout_exhausts_and_fires_diagnostics() {
    init_tracing();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut config = HttpProbeConfig::new(format!("{}/ok", server.uri()));
    config.timeout = Duration::from_secs(2);
    let probe = HttpHealthProbe::new(config).unwrap();

    let server = Arc::new(server);
    let diagnostics_runs = Arc::new(AtomicU32::new(0));
    let runs = diagnostics_runs.clone();
    let diag_server = server.clone();

    let policy = PollPolicy::new(5, Duration::from_millis(10))
        .unwrap()
        .with_diagnostic_threshold(2);
    let outcome = poll_with_diagnostics(
        &policy,
        "https_health_check",
        || {
            let probe = probe.clone();
            async move { probe.check().await }
        },
        move |attempt| {
            let runs = runs.clone();
            let server = diag_server.clone();
            async move {
                runs.fetch_add(1, Ordering::SeqCst);
                let seen = server.received_requests().await.unwrap_or_default();
                warn!(
                    attempt,
                    requests_seen = seen.len(),
                    "health checks still failing, dumping endpoint traffic"
                );
                Ok::<(), std::convert::Infallible>(())
            }
        },
    )
    .await;

    assert_eq!(outcome.status, PollStatus::Exhausted);
    assert_eq!(outcome.attempts, 5);
    assert_eq!(diagnostics_runs.load(Ordering::SeqCst), 1);
    assert!(outcome.into_result().is_err());
}
