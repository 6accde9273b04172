//! Opening caller-supplied source locations.

use std::ffi::OsStr;
use std::path::Path;

use urm_core::errors::SourceError;
use urm_core::traits::TypeSource;

use super::archive::ArchiveSource;
use super::directory::{DirectorySource, WalkOptions};
use super::index_file::IndexFileSource;

/// What kind of source a location names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    Directory,
    Archive,
    Index,
}

/// Classify a location by what is on disk, without opening it.
pub fn classify(location: &str) -> Result<LocationKind, SourceError> {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        return Err(SourceError::MalformedLocation {
            location: location.to_string(),
        });
    }
    let path = Path::new(trimmed);
    if path.is_dir() {
        return Ok(LocationKind::Directory);
    }
    if !path.is_file() {
        return Err(SourceError::MalformedLocation {
            location: location.to_string(),
        });
    }
    let extension = path.extension().and_then(OsStr::to_str).unwrap_or("");
    if matches_ignore_case(extension, &["jar", "zip"]) {
        Ok(LocationKind::Archive)
    } else if extension.eq_ignore_ascii_case("json") {
        Ok(LocationKind::Index)
    } else {
        Err(SourceError::UnsupportedLocation {
            path: path.to_path_buf(),
        })
    }
}

/// Open one location as a type source owned by the caller.
pub fn open_location(
    location: &str,
    options: &WalkOptions,
) -> Result<Box<dyn TypeSource>, SourceError> {
    let path = Path::new(location.trim());
    let source: Box<dyn TypeSource> = match classify(location)? {
        LocationKind::Directory => Box::new(DirectorySource::open(path, options)?),
        LocationKind::Archive => Box::new(ArchiveSource::open(path)?),
        LocationKind::Index => Box::new(IndexFileSource::open(path)?),
    };
    Ok(source)
}

fn matches_ignore_case(candidate: &str, values: &[&str]) -> bool {
    values
        .iter()
        .any(|value| candidate.eq_ignore_ascii_case(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_location_is_malformed() {
        assert!(matches!(
            classify("   "),
            Err(SourceError::MalformedLocation { .. })
        ));
    }

    #[test]
    fn missing_path_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.jar");
        assert!(matches!(
            classify(&missing.display().to_string()),
            Err(SourceError::MalformedLocation { .. })
        ));
    }

    #[test]
    fn kinds_follow_disk_and_extension() {
        let dir = tempfile::tempdir().unwrap();
        let jar = dir.path().join("lib.JAR");
        let index = dir.path().join("types.json");
        let text = dir.path().join("notes.txt");
        for path in [&jar, &index, &text] {
            std::fs::write(path, b"").unwrap();
        }

        assert_eq!(classify(&dir.path().display().to_string()).unwrap(), LocationKind::Directory);
        assert_eq!(classify(&jar.display().to_string()).unwrap(), LocationKind::Archive);
        assert_eq!(classify(&index.display().to_string()).unwrap(), LocationKind::Index);
        assert!(matches!(
            classify(&text.display().to_string()),
            Err(SourceError::UnsupportedLocation { .. })
        ));
    }
}
