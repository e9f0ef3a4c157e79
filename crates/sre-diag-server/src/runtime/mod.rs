//! OS-backed runtime statistics.
//!
//! Native processes have no managed heap or garbage collector, so the
//! provider maps the heap gauges onto process memory and reports the GC
//! counters as zero.

pub mod system;

pub use system::{bounded_committed, SystemStats};
