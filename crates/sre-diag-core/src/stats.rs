//! Runtime introspection capability.
//!
//! Handlers never touch process counters directly; they ask a
//! [`RuntimeStatsProvider`]. The server crate ships an OS-backed one, and
//! [`FixedStats`] returns preset values for tests.

use std::time::Duration;

use crate::report::RuntimeSnapshot;

/// Read-only source of process/runtime counters.
///
/// Implementations must be cheap enough to call once per request and must
/// not fail: an unreadable counter is reported as its default (0, or -1 for
/// the load average).
pub trait RuntimeStatsProvider: Send + Sync {
    /// Fresh point-in-time read of every counter.
    fn snapshot(&self) -> RuntimeSnapshot;

    /// Time since the process started serving.
    fn uptime(&self) -> Duration;

    /// Version string of the hosting runtime/platform.
    fn runtime_version(&self) -> String;

    /// Identifier of the hosting server.
    fn server_info(&self) -> String;
}

/// Provider that returns the same values on every call.
#[derive(Debug, Clone)]
pub struct FixedStats {
    pub snapshot: RuntimeSnapshot,
    pub runtime_version: String,
    pub server_info: String,
}

impl FixedStats {
    pub fn new(snapshot: RuntimeSnapshot) -> Self {
        Self {
            snapshot,
            runtime_version: "fixed".into(),
            server_info: "fixed-stats".into(),
        }
    }
}

impl RuntimeStatsProvider for FixedStats {
    fn snapshot(&self) -> RuntimeSnapshot {
        self.snapshot.clone()
    }

    fn uptime(&self) -> Duration {
        Duration::from_secs_f64(self.snapshot.uptime_seconds.max(0.0))
    }

    fn runtime_version(&self) -> String {
        self.runtime_version.clone()
    }

    fn server_info(&self) -> String {
        self.server_info.clone()
    }
}
