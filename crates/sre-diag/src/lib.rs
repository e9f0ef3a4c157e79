//! Top-level facade crate for sre-diag.
//!
//! Re-exports the core report types and the server library so users can depend on a single crate.

pub mod core {
    pub use sre_diag_core::*;
}

pub mod server {
    pub use sre_diag_server::*;
}
