//! Discovery configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a discovery run, mirroring the parameters a CLI or
/// build plugin would pass.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Namespace prefixes to scan, e.g. `["com.example.shapes"]`.
    pub namespaces: Vec<String>,
    /// Entries matched against a type's qualified name, simple name, or namespace.
    pub ignores: Vec<String>,
    /// Extra type source locations: class directories, `.jar`/`.zip` archives,
    /// or `.json` type indexes.
    pub sources: Vec<String>,
    /// Explicitly allow types under the engine's own namespace. Default: false.
    pub allow_internal_types: Option<bool>,
    /// Scan namespaces in parallel. Default: true.
    pub parallel: Option<bool>,
    /// Worker threads for directory walking. None = auto-detect.
    pub threads: Option<usize>,
    /// Follow symbolic links inside class directories. Default: false.
    pub follow_symlinks: Option<bool>,
}

impl DiscoveryConfig {
    pub fn effective_allow_internal_types(&self) -> bool {
        self.allow_internal_types.unwrap_or(false)
    }

    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }

    /// Returns the effective thread count, defaulting to 0 (auto-detect).
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(0)
    }

    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }
}
