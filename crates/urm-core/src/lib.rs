//! # urm-core
//!
//! Foundation crate for the URM type discovery engine.
//! Defines the type descriptor, the type source trait, errors, config,
//! the process-wide internal-types flag, logging setup, and constants.
//! The discovery crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod flags;
pub mod logging;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{DiscoveryConfig, UrmConfig};
pub use errors::error_code::UrmErrorCode;
pub use errors::{DiscoveryError, DiscoveryResult, SourceError};
pub use flags::StickyFlag;
pub use traits::TypeSource;
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::descriptor::TypeDescriptor;
pub use types::filter::NameFilter;
