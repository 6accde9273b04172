//! Engine-wide constants.

/// Namespace the engine's own types live under. Excluded from every scan
/// unless the internal-types flag is raised.
pub const RESERVED_NAMESPACE: &str = "de.markusmo3.urm";

/// Environment variable seeding the internal-types flag on first read.
pub const ALLOW_INTERNAL_TYPES_ENV: &str = "URM_ALLOW_INTERNAL_TYPES";

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "URM_LOG";

/// Simple names of types that carry namespace metadata rather than domain content.
pub const NAMESPACE_MARKERS: &[&str] = &["package-info", "module-info"];

/// Separator between namespace segments.
pub const NAMESPACE_SEPARATOR: char = '.';

/// Separator between an enclosing type and a nested type in a binary name.
pub const NESTED_SEPARATOR: char = '$';

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "urm.toml";
