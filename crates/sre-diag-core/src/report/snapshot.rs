use serde::{Deserialize, Serialize};

use super::exposition::{MetricFamily, MetricKind, Sample};

/// Point-in-time read of process/runtime counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeSnapshot {
    pub heap_used: u64,
    pub heap_max: u64,
    pub heap_committed: u64,
    pub non_heap_used: u64,
    pub processor_count: u64,
    /// -1.0 when the platform has no load average.
    pub load_average: f64,
    pub uptime_seconds: f64,
    pub gc_collection_count: u64,
    pub gc_collection_time_seconds: f64,
}

/// Allocator view served under `/info` `memory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemorySnapshot {
    pub total: u64,
    pub free: u64,
    pub max: u64,
}

impl RuntimeSnapshot {
    pub fn memory(&self) -> MemorySnapshot {
        MemorySnapshot {
            total: self.heap_committed,
            free: self.heap_committed.saturating_sub(self.heap_used),
            max: self.heap_max,
        }
    }

    /// The fixed `/metrics` families, in exposition order.
    pub fn metric_families(&self) -> [MetricFamily; 9] {
        use MetricKind::{Counter, Gauge};
        use Sample::{Float, Unsigned};

        [
            MetricFamily::new(
                "jvm_memory_heap_used_bytes",
                "Used heap memory in bytes",
                Gauge,
                Unsigned(self.heap_used),
            ),
            MetricFamily::new(
                "jvm_memory_heap_max_bytes",
                "Maximum heap memory in bytes",
                Gauge,
                Unsigned(self.heap_max),
            ),
            MetricFamily::new(
                "jvm_memory_heap_committed_bytes",
                "Committed heap memory in bytes",
                Gauge,
                Unsigned(self.heap_committed),
            ),
            MetricFamily::new(
                "jvm_memory_non_heap_used_bytes",
                "Used non-heap memory in bytes",
                Gauge,
                Unsigned(self.non_heap_used),
            ),
            MetricFamily::new(
                "system_cpu_count",
                "Number of available processors",
                Gauge,
                Unsigned(self.processor_count),
            ),
            MetricFamily::new(
                "system_load_average",
                "System load average",
                Gauge,
                Float(self.load_average),
            ),
            MetricFamily::new(
                "jvm_uptime_seconds",
                "JVM uptime in seconds",
                Counter,
                Float(self.uptime_seconds),
            ),
            MetricFamily::new(
                "jvm_gc_collection_total",
                "Total GC collections",
                Counter,
                Unsigned(self.gc_collection_count),
            ),
            MetricFamily::new(
                "jvm_gc_collection_time_seconds",
                "Total GC collection time in seconds",
                Counter,
                Float(self.gc_collection_time_seconds),
            ),
        ]
    }

    /// Render the fixed families in Prometheus text format.
    pub fn to_exposition(&self) -> String {
        super::exposition::render(&self.metric_families())
    }
}
