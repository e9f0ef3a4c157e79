//! sre-diag server library entry.
//!
//! Wires configuration, the OS-backed stats provider, and the diagnostics
//! handlers into an axum router. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod ops;
pub mod router;
pub mod runtime;
