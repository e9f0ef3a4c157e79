//! Shared error type across sre-diag crates.

use thiserror::Error;

/// Stable error codes, used in startup logs and by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Malformed or out-of-range configuration.
    ConfigInvalid,
    /// Unsupported config schema version.
    UnsupportedVersion,
    /// Filesystem or socket failure.
    Io,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::ConfigInvalid => "CONFIG_INVALID",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Io => "IO",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, DiagError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum DiagError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("io: {0}")]
    Io(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl DiagError {
    pub fn client_code(&self) -> ClientCode {
        match self {
            DiagError::Config(_) => ClientCode::ConfigInvalid,
            DiagError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            DiagError::Io(_) => ClientCode::Io,
            DiagError::Internal(_) => ClientCode::Internal,
        }
    }
}

impl From<std::io::Error> for DiagError {
    fn from(e: std::io::Error) -> Self {
        DiagError::Io(e.to_string())
    }
}
