use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{MemorySnapshot, APPLICATION_NAME, SERVICE_VERSION};

/// Paths served by the diagnostics router, in the order `/info` lists them.
pub const ENDPOINTS: [&str; 3] = ["/health", "/info", "/metrics"];

const DEFAULT_ENVIRONMENT: &str = "dev";

/// Resolve the `ENVIRONMENT` value; unset or blank falls back to `"dev"`.
/// Anything else is returned as given.
pub fn environment_name(raw: Option<&str>) -> String {
    match raw {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => DEFAULT_ENVIRONMENT.to_string(),
    }
}

/// `/info` body.
#[derive(Debug, Clone, Serialize)]
pub struct InfoReport {
    pub application: &'static str,
    pub version: &'static str,
    /// Time the report was generated; no build timestamp is embedded.
    pub build_time: DateTime<Utc>,
    #[serde(rename = "java_version")]
    pub runtime_version: String,
    pub server_info: String,
    pub environment: String,
    pub memory: MemorySnapshot,
    pub endpoints: [&'static str; 3],
}

impl InfoReport {
    pub fn new(
        now: DateTime<Utc>,
        runtime_version: String,
        server_info: String,
        environment: String,
        memory: MemorySnapshot,
    ) -> Self {
        Self {
            application: APPLICATION_NAME,
            version: SERVICE_VERSION,
            build_time: now,
            runtime_version,
            server_info,
            environment,
            memory,
            endpoints: ENDPOINTS,
        }
    }
}
