//! Errors surfaced to the caller of a discovery run.
//!
//! Only invalid invocations are fatal. Malformed source locations and
//! unresolvable types are absorbed by the engine and logged instead.

use super::error_code::{self, UrmErrorCode};
use super::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("No namespaces defined for scanning")]
    NoNamespaces,

    #[error("Namespace at position {position} is blank")]
    BlankNamespace { position: usize },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl UrmErrorCode for DiscoveryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoNamespaces => error_code::NO_NAMESPACES,
            Self::BlankNamespace { .. } => error_code::BLANK_NAMESPACE,
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type DiscoveryResult<T> = Result<T, DiscoveryError>;
