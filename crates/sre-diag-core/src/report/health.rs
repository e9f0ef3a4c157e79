use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{SERVICE_NAME, SERVICE_VERSION};

/// Placeholder sub-check results. Nothing is probed; every entry is `"ok"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthChecks {
    pub database: &'static str,
    pub memory: &'static str,
    pub disk: &'static str,
}

impl Default for HealthChecks {
    fn default() -> Self {
        Self {
            database: "ok",
            memory: "ok",
            disk: "ok",
        }
    }
}

/// `/health` body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub service: &'static str,
    pub version: &'static str,
    /// `"<whole seconds> seconds"`.
    pub uptime: String,
    pub checks: HealthChecks,
}

impl HealthReport {
    pub fn new(uptime: Duration, now: DateTime<Utc>) -> Self {
        Self {
            status: "healthy",
            timestamp: now,
            service: SERVICE_NAME,
            version: SERVICE_VERSION,
            uptime: format!("{} seconds", uptime.as_secs()),
            checks: HealthChecks::default(),
        }
    }
}
