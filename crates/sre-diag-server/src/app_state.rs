//! Shared application state for the diagnostics server.

use std::sync::Arc;

use sre_diag_core::RuntimeStatsProvider;

use crate::config::ServerConfig;
use crate::runtime::SystemStats;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    stats: Arc<dyn RuntimeStatsProvider>,
}

impl AppState {
    /// State backed by the host OS.
    pub fn new(cfg: ServerConfig) -> Self {
        Self::with_stats(cfg, Arc::new(SystemStats::new()))
    }

    /// State backed by an arbitrary provider (tests use `FixedStats`).
    pub fn with_stats(cfg: ServerConfig, stats: Arc<dyn RuntimeStatsProvider>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, stats }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn stats(&self) -> &dyn RuntimeStatsProvider {
        self.inner.stats.as_ref()
    }
}
