//! Error types for every engine subsystem.
//! Each error implements [`UrmErrorCode`](error_code::UrmErrorCode).

pub mod error_code;

mod config_error;
mod discovery_error;
mod source_error;

pub use config_error::ConfigError;
pub use discovery_error::{DiscoveryError, DiscoveryResult};
pub use source_error::SourceError;
