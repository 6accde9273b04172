//! Compiled-output directory source (e.g. `target/classes`).
//!
//! Walks the tree once with the `ignore` crate's `WalkParallel`, mapping
//! every `.class` file to its binary name by path. A header is read only
//! when its name is resolved; every class under a prefix is already
//! enumerated by path, so the source records no subtype edges.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crossbeam_channel as channel;
use urm_core::errors::SourceError;
use urm_core::traits::TypeSource;
use urm_core::types::descriptor::TypeDescriptor;
use urm_core::types::filter::NameFilter;
use urm_core::types::namespace::binary_name_from_internal;

use super::classfile::{parse_class_header, ClassHeader};

/// Walker settings for directory sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkOptions {
    /// Number of walker threads. 0 = auto-detect.
    pub threads: usize,
    pub follow_symlinks: bool,
}

#[derive(Debug)]
pub struct DirectorySource {
    label: String,
    classes: BTreeMap<String, PathBuf>,
}

impl DirectorySource {
    pub fn open(root: &Path, options: &WalkOptions) -> Result<Self, SourceError> {
        if !root.is_dir() {
            return Err(SourceError::MalformedLocation {
                location: root.display().to_string(),
            });
        }
        let classes = walk_class_files(root, options)
            .into_iter()
            .filter_map(|path| {
                let relative = path.strip_prefix(root).ok()?;
                let internal = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                Some((binary_name_from_internal(&internal), path))
            })
            .collect::<BTreeMap<_, _>>();

        tracing::debug!(root = %root.display(), classes = classes.len(), "class directory indexed");
        Ok(Self {
            label: root.display().to_string(),
            classes,
        })
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    fn read_header(&self, path: &Path) -> Result<ClassHeader, SourceError> {
        let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse_class_header(&bytes).map_err(|e| SourceError::ClassFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

impl TypeSource for DirectorySource {
    fn label(&self) -> &str {
        &self.label
    }

    fn enumerate(&self, filter: &NameFilter) -> Vec<String> {
        self.classes
            .keys()
            .filter(|name| filter.accepts(name))
            .cloned()
            .collect()
    }

    fn resolve(&self, name: &str) -> Result<TypeDescriptor, SourceError> {
        let path = self
            .classes
            .get(name)
            .ok_or_else(|| SourceError::Unresolvable {
                name: name.to_string(),
                source_label: self.label.clone(),
            })?;
        let header = self.read_header(path).inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "unreadable class file");
        })?;
        if header.name != name {
            return Err(SourceError::ClassFile {
                path: path.clone(),
                message: format!("declares {} instead of {}", header.name, name),
            });
        }
        Ok(TypeDescriptor::new(header.name.as_str(), self.label.as_str())
            .with_supertypes(header.supertypes()))
    }
}

/// Collect every `.class` file under `root`, sorted by path.
///
/// Ignore files are not honored: compiled output normally lives in
/// git-ignored directories.
fn walk_class_files(root: &Path, options: &WalkOptions) -> Vec<PathBuf> {
    let (tx, rx) = channel::unbounded();

    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(options.follow_symlinks);
    if options.threads > 0 {
        builder.threads(options.threads);
    }

    builder.build_parallel().run(|| {
        let tx = tx.clone();
        Box::new(move |entry| {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable directory entry");
                    return ignore::WalkState::Continue;
                }
            };

            let is_file = entry.file_type().map(|ft| ft.is_file()).unwrap_or(false);
            let is_class = entry
                .path()
                .extension()
                .and_then(OsStr::to_str)
                .map(|ext| ext.eq_ignore_ascii_case("class"))
                .unwrap_or(false);
            if is_file && is_class {
                let _ = tx.send(entry.into_path());
            }

            ignore::WalkState::Continue
        })
    });

    drop(tx);
    let mut files: Vec<PathBuf> = rx.into_iter().collect();
    // Sort for deterministic output
    files.sort();
    files
}
