//! Server config loader (strict parsing).

pub mod schema;

use std::fs;

use sre_diag_core::error::{DiagError, Result};

pub use schema::{ServerConfig, ServerSection};

/// Env var naming an optional YAML config file.
pub const CONFIG_PATH_ENV: &str = "SRE_DIAG_CONFIG";
/// Env var overriding `server.listen`.
pub const LISTEN_ENV: &str = "LISTEN_ADDR";

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| DiagError::Io(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| DiagError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the effective config from the process environment.
///
/// `SRE_DIAG_CONFIG` selects a file (defaults are used when unset), then
/// `LISTEN_ADDR` overrides the listen address.
pub fn load_from_env() -> Result<ServerConfig> {
    let mut cfg = match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.trim().is_empty() => load_from_file(path.trim())?,
        _ => ServerConfig::default(),
    };

    if let Ok(listen) = std::env::var(LISTEN_ENV) {
        if !listen.trim().is_empty() {
            cfg.server.listen = listen.trim().to_string();
            cfg.validate()?;
        }
    }
    Ok(cfg)
}
