//! Stable, machine-readable error codes.

/// Maps an error to a stable code that callers can match on without
/// parsing the display message.
pub trait UrmErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const NO_NAMESPACES: &str = "NO_NAMESPACES";
pub const BLANK_NAMESPACE: &str = "BLANK_NAMESPACE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
pub const ARCHIVE_ERROR: &str = "ARCHIVE_ERROR";
pub const CLASS_FILE_ERROR: &str = "CLASS_FILE_ERROR";
pub const INDEX_PARSE_ERROR: &str = "INDEX_PARSE_ERROR";
pub const MALFORMED_LOCATION: &str = "MALFORMED_LOCATION";
pub const UNSUPPORTED_LOCATION: &str = "UNSUPPORTED_LOCATION";
pub const UNRESOLVABLE_TYPE: &str = "UNRESOLVABLE_TYPE";
