//! Report types served by the diagnostics endpoints.
//!
//! - `snapshot`: point-in-time runtime counters
//! - `health`: `/health` body
//! - `info`: `/info` body
//! - `exposition`: Prometheus text format for `/metrics`
//!
//! Every report is built fresh per request and dropped after serialization.

pub mod exposition;
pub mod health;
pub mod info;
pub mod snapshot;

pub use exposition::{MetricFamily, MetricKind, Sample};
pub use health::{HealthChecks, HealthReport};
pub use info::{environment_name, InfoReport, ENDPOINTS};
pub use snapshot::{MemorySnapshot, RuntimeSnapshot};

/// Service name reported by `/health`.
pub const SERVICE_NAME: &str = "backend-service";
/// Application name reported by `/info`.
pub const APPLICATION_NAME: &str = "Veeva SRE Backend";
/// Version reported by both JSON endpoints.
pub const SERVICE_VERSION: &str = "1.0.0";
