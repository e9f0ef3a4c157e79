//! sre-diag core: runtime snapshot types, report builders, and the
//! Prometheus text writer.
//!
//! This crate knows nothing about HTTP or the async runtime. The server crate
//! plugs an OS-backed [`stats::RuntimeStatsProvider`] into it and serializes
//! the reports it builds.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! A counter that cannot be read degrades to its documented default instead
//! of taking a request down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod report;
pub mod stats;

/// Shared result type.
pub use error::{DiagError, Result};
pub use stats::{FixedStats, RuntimeStatsProvider};
