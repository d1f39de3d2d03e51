//! # vigil-config
//!
//! Environment-derived parameters for deployment verification runs.
//!
//! Verification runs are configured entirely through `TEST_*`
//! environment variables (region, subnet IDs, tenant ID, certificate
//! ARN, desired replica count, domain name). This crate reads them into
//! typed structs up front so a missing or malformed variable fails the
//! run immediately, with a reason, instead of surfacing later as an
//! opaque provisioning error.
//!
//! Reads go through an [`Env`] snapshot rather than `std::env` directly
//! so tests never mutate process-global state.

use std::collections::HashMap;

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("environment variable {0} is required")]
    Missing(String),

    /// A list variable contained no non-empty entries.
    #[error("environment variable {0} must not be an empty list")]
    EmptyList(String),

    /// A count variable did not parse as a positive integer.
    #[error("environment variable {key} must be a positive integer, got {value:?}")]
    InvalidCount { key: String, value: String },
}

/// Immutable snapshot of configuration variables.
#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: HashMap<String, String>,
}

impl Env {
    /// Snapshot the process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Build from explicit pairs. Intended for tests.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a variable, treating empty values as unset.
    pub fn optional(&self, key: &str) -> Option<String> {
        self.vars
            .get(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Look up a variable or fall back to a default.
    pub fn optional_or(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| default.to_string())
    }

    /// Look up a variable that must be set and non-empty.
    pub fn require(&self, key: &str) -> Result<String, ConfigError> {
        self.optional(key)
            .ok_or_else(|| ConfigError::Missing(key.to_string()))
    }

    /// Look up a comma-separated list that must contain at least one
    /// non-empty entry. Entries are trimmed; empty entries are dropped.
    pub fn require_list(&self, key: &str) -> Result<Vec<String>, ConfigError> {
        let raw = self.require(key)?;
        let items: Vec<String> = raw
            .split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        if items.is_empty() {
            return Err(ConfigError::EmptyList(key.to_string()));
        }
        Ok(items)
    }

    /// Look up an optional positive count, falling back to a default
    /// when unset. A set-but-unparsable or non-positive value is an
    /// error rather than a silent fallback.
    pub fn optional_count(&self, key: &str, default: u64) -> Result<u64, ConfigError> {
        let Some(raw) = self.optional(key) else {
            return Ok(default);
        };

        match raw.parse::<u64>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ConfigError::InvalidCount {
                key: key.to_string(),
                value: raw,
            }),
        }
    }

    /// Look up an optional boolean flag; only the exact value `"true"`
    /// enables it.
    pub fn flag(&self, key: &str) -> bool {
        self.optional(key).as_deref() == Some("true")
    }
}

/// Parameters for verifying the ECS Fargate stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsParams {
    pub region: String,
    pub vpc_id: String,
    pub private_subnet_ids: Vec<String>,
    pub public_subnet_ids: Vec<String>,
    pub tenant_id: String,

    /// Externally managed certificate, if any. When unset and
    /// `enable_acm_import` is false, the stack serves plain HTTP.
    pub certificate_arn: Option<String>,

    /// Import a self-signed certificate into ACM for this run.
    pub enable_acm_import: bool,

    /// Replica count the service must reach exactly.
    pub desired_count: u64,
}

impl AwsParams {
    pub fn from_env(env: &Env) -> Result<Self, ConfigError> {
        Ok(Self {
            region: env.optional_or("AWS_DEFAULT_REGION", "ap-northeast-1"),
            vpc_id: env.require("TEST_VPC_ID")?,
            private_subnet_ids: env.require_list("TEST_PRIVATE_SUBNET_IDS")?,
            public_subnet_ids: env.require_list("TEST_PUBLIC_SUBNET_IDS")?,
            tenant_id: env.require("TEST_TENANT_ID")?,
            certificate_arn: env.optional("TEST_CERTIFICATE_ARN"),
            enable_acm_import: env.flag("TEST_ENABLE_ACM_IMPORT"),
            desired_count: env.optional_count("TEST_DESIRED_COUNT", 1)?,
        })
    }

    /// Whether the run has any certificate to serve HTTPS with.
    pub fn has_certificate(&self) -> bool {
        self.certificate_arn.is_some() || self.enable_acm_import
    }
}

/// Parameters for verifying the Cloud Run + Cloud SQL stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcpParams {
    pub project_id: String,
    pub region: String,
    pub tenant_id: String,

    /// Custom domain to verify HTTPS/DNS against, if configured.
    pub domain_name: Option<String>,
    pub dns_zone_name: Option<String>,
}

impl GcpParams {
    pub fn from_env(env: &Env) -> Result<Self, ConfigError> {
        Ok(Self {
            project_id: env.require("TEST_GCP_PROJECT_ID")?,
            region: env.optional_or("TEST_GCP_REGION", "asia-northeast1"),
            tenant_id: env.require("TEST_TENANT_ID")?,
            domain_name: env.optional("TEST_DOMAIN_NAME"),
            dns_zone_name: env.optional("TEST_DNS_ZONE_NAME"),
        })
    }
}
