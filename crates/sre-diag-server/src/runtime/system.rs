use std::thread::available_parallelism;
use std::time::{Duration, Instant};

use sre_diag_core::report::RuntimeSnapshot;
use sre_diag_core::RuntimeStatsProvider;
use sysinfo::{Pid, System};

/// Reported when the platform has no load average.
const LOAD_AVERAGE_UNSUPPORTED: f64 = -1.0;

/// Committed bytes bounded to `[used, max]`; a zero `max` means unknown.
///
/// Virtual size can exceed a tight cgroup limit, so it is capped to keep
/// used <= committed <= max.
pub fn bounded_committed(used: u64, committed: u64, max: u64) -> u64 {
    let committed = if max > 0 { committed.min(max) } else { committed };
    committed.max(used)
}

/// `RuntimeStatsProvider` backed by `sysinfo`.
///
/// A fresh `System` is built per snapshot and only the current process and
/// memory totals are refreshed, so concurrent requests share nothing.
pub struct SystemStats {
    started: Instant,
    pid: Option<Pid>,
    host_name: Option<String>,
}

impl SystemStats {
    /// Create the provider; uptime is measured from this call.
    pub fn new() -> Self {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(e) => {
                tracing::warn!(error = %e, "current pid unavailable; process memory will read as 0");
                None
            }
        };

        Self {
            started: Instant::now(),
            pid,
            host_name: System::host_name(),
        }
    }

    fn process_memory(&self, sys: &mut System) -> (u64, u64) {
        let Some(pid) = self.pid else {
            return (0, 0);
        };
        if !sys.refresh_process(pid) {
            tracing::warn!(%pid, "process refresh failed");
            return (0, 0);
        }
        sys.process(pid)
            .map(|p| (p.memory(), p.virtual_memory()))
            .unwrap_or((0, 0))
    }

    fn memory_limit(sys: &mut System) -> u64 {
        sys.refresh_memory();
        match sys.cgroup_limits() {
            Some(limits) if limits.total_memory > 0 => limits.total_memory,
            _ => sys.total_memory(),
        }
    }

    fn processor_count(sys: &mut System) -> u64 {
        match available_parallelism() {
            Ok(n) => n.get() as u64,
            Err(_) => {
                sys.refresh_cpu();
                sys.cpus().len() as u64
            }
        }
    }

    fn load_average() -> f64 {
        if cfg!(windows) || !sysinfo::IS_SUPPORTED_SYSTEM {
            return LOAD_AVERAGE_UNSUPPORTED;
        }
        System::load_average().one
    }
}

impl Default for SystemStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeStatsProvider for SystemStats {
    fn snapshot(&self) -> RuntimeSnapshot {
        let mut sys = System::new();
        let (resident, virtual_mem) = self.process_memory(&mut sys);
        let limit = Self::memory_limit(&mut sys);

        RuntimeSnapshot {
            heap_used: resident,
            heap_max: limit,
            heap_committed: bounded_committed(resident, virtual_mem, limit),
            non_heap_used: 0,
            processor_count: Self::processor_count(&mut sys),
            load_average: Self::load_average(),
            uptime_seconds: self.uptime().as_secs_f64(),
            gc_collection_count: 0,
            gc_collection_time_seconds: 0.0,
        }
    }

    fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    fn runtime_version(&self) -> String {
        format!(
            "{} {} ({})",
            std::env::consts::OS,
            System::kernel_version().unwrap_or_else(|| "unknown".into()),
            std::env::consts::ARCH,
        )
    }

    fn server_info(&self) -> String {
        let base = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
        match &self.host_name {
            Some(host) => format!("{base} on {host}"),
            None => base.to_string(),
        }
    }
}
