//! Errors raised while opening a type source or resolving a name against it.

use std::path::PathBuf;

use super::error_code::{self, UrmErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("IO error while reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Archive error in {}: {message}", path.display())]
    Archive { path: PathBuf, message: String },

    #[error("Class file error in {}: {message}", path.display())]
    ClassFile { path: PathBuf, message: String },

    #[error("Type index error in {}: {source}", path.display())]
    IndexParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed source location: {location:?}")]
    MalformedLocation { location: String },

    #[error("Unsupported source location {}: expected a directory, .jar, .zip or .json", path.display())]
    UnsupportedLocation { path: PathBuf },

    #[error("Type {name} cannot be resolved by source {source_label}")]
    Unresolvable { name: String, source_label: String },
}

impl UrmErrorCode for SourceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::IO_ERROR,
            Self::Archive { .. } => error_code::ARCHIVE_ERROR,
            Self::ClassFile { .. } => error_code::CLASS_FILE_ERROR,
            Self::IndexParse { .. } => error_code::INDEX_PARSE_ERROR,
            Self::MalformedLocation { .. } => error_code::MALFORMED_LOCATION,
            Self::UnsupportedLocation { .. } => error_code::UNSUPPORTED_LOCATION,
            Self::Unresolvable { .. } => error_code::UNRESOLVABLE_TYPE,
        }
    }
}
