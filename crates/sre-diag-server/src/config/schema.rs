use std::net::SocketAddr;

use serde::Deserialize;
use sre_diag_core::error::{DiagError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(DiagError::UnsupportedVersion);
        }
        self.server.validate()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Extra mount point for the diagnostics routes (e.g. `/api`).
    #[serde(default)]
    pub api_prefix: Option<String>,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            api_prefix: None,
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;

        if let Some(prefix) = &self.api_prefix {
            if !prefix.starts_with('/') || prefix.ends_with('/') {
                return Err(DiagError::Config(
                    "server.api_prefix must start with '/' and must not end with '/'".into(),
                ));
            }
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            DiagError::Config(format!("server.listen must be a valid SocketAddr ({}): {e}", self.listen))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
