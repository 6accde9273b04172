use serde::{Deserialize, Serialize};

/// Log output settings. `URM_LOG` overrides `level` when set.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `"debug"` or `"urm_discovery=trace"`. Default: "info".
    pub level: Option<String>,
    /// Emit ANSI colors. Default: false.
    pub ansi: Option<bool>,
}

impl LoggingConfig {
    pub fn effective_level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn effective_ansi(&self) -> bool {
        self.ansi.unwrap_or(false)
    }
}
