//! `.jar` / `.zip` archive source.
//!
//! Entries are indexed by path and their headers read only on resolution,
//! so the source records no subtype edges.
//!
//! The archive stays open for the lifetime of the source and is closed when
//! the source is dropped, which happens when the discovery run that opened
//! it finishes.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use zip::ZipArchive;

use urm_core::errors::SourceError;
use urm_core::traits::TypeSource;
use urm_core::types::descriptor::TypeDescriptor;
use urm_core::types::filter::NameFilter;
use urm_core::types::namespace::binary_name_from_internal;

use super::classfile::{parse_class_header, ClassHeader};

pub struct ArchiveSource {
    path: PathBuf,
    label: String,
    archive: Mutex<ZipArchive<BufReader<File>>>,
    /// Binary name → entry name.
    entries: BTreeMap<String, String>,
}

impl ArchiveSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let archive = ZipArchive::new(BufReader::new(file)).map_err(|e| SourceError::Archive {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let entries = archive
            .file_names()
            .filter(|name| name.ends_with(".class") && !should_skip_entry(name))
            .map(|name| {
                let internal = name.strip_prefix("classes/").unwrap_or(name);
                (binary_name_from_internal(internal), name.to_string())
            })
            .collect::<BTreeMap<_, _>>();

        tracing::debug!(archive = %path.display(), classes = entries.len(), "archive opened");
        Ok(Self {
            path: path.to_path_buf(),
            label: path.display().to_string(),
            archive: Mutex::new(archive),
            entries,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn read_header(&self, entry_name: &str) -> Result<ClassHeader, SourceError> {
        let mut buffer = Vec::new();
        {
            let mut archive = self.archive.lock().unwrap_or_else(PoisonError::into_inner);
            let mut entry = archive.by_name(entry_name).map_err(|e| SourceError::Archive {
                path: self.path.clone(),
                message: format!("{}: {}", entry_name, e),
            })?;
            entry
                .read_to_end(&mut buffer)
                .map_err(|source| SourceError::Io {
                    path: archive_entry_path(&self.path, entry_name),
                    source,
                })?;
        }
        parse_class_header(&buffer).map_err(|e| SourceError::ClassFile {
            path: archive_entry_path(&self.path, entry_name),
            message: e.to_string(),
        })
    }
}

impl TypeSource for ArchiveSource {
    fn label(&self) -> &str {
        &self.label
    }

    fn enumerate(&self, filter: &NameFilter) -> Vec<String> {
        self.entries
            .keys()
            .filter(|name| filter.accepts(name))
            .cloned()
            .collect()
    }

    fn resolve(&self, name: &str) -> Result<TypeDescriptor, SourceError> {
        let entry_name = self
            .entries
            .get(name)
            .ok_or_else(|| SourceError::Unresolvable {
                name: name.to_string(),
                source_label: self.label.clone(),
            })?;
        let header = self.read_header(entry_name).inspect_err(|e| {
            tracing::warn!(class = %name, error = %e, "unreadable archive entry");
        })?;
        if header.name != name {
            return Err(SourceError::ClassFile {
                path: archive_entry_path(&self.path, entry_name),
                message: format!("declares {} instead of {}", header.name, name),
            });
        }
        Ok(TypeDescriptor::new(header.name.as_str(), self.label.as_str())
            .with_supertypes(header.supertypes()))
    }
}

impl Drop for ArchiveSource {
    fn drop(&mut self) {
        tracing::debug!(archive = %self.path.display(), "archive released");
    }
}

impl std::fmt::Debug for ArchiveSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchiveSource")
            .field("path", &self.path)
            .field("entries", &self.entries.len())
            .finish()
    }
}

fn should_skip_entry(name: &str) -> bool {
    if name.starts_with("META-INF/") {
        return true;
    }
    if let Some(stripped) = name.strip_prefix("classes/") {
        return should_skip_entry(stripped);
    }
    false
}

fn archive_entry_path(archive: &Path, entry: &str) -> PathBuf {
    PathBuf::from(format!("{}!/{}", archive.display(), entry))
}
