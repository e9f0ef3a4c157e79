//! Axum router wiring.
//!
//! Exposes `/health`, `/info` and `/metrics`, plus the same routes under
//! `server.api_prefix` when one is configured.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops};

fn diagnostics_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(ops::health))
        .route("/info", get(ops::info))
        .route("/metrics", get(ops::metrics))
}

pub fn build_router(state: AppState) -> Router {
    let mut router = diagnostics_routes();
    if let Some(prefix) = state.cfg().server.api_prefix.as_deref() {
        router = router.nest(prefix, diagnostics_routes());
    }
    router.with_state(state)
}
