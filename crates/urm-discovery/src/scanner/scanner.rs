//! Namespace scanner: name filter → enumerate + subtype index → resolve.

use std::collections::BTreeSet;
use std::time::Instant;

use urm_core::constants::RESERVED_NAMESPACE;
use urm_core::errors::SourceError;
use urm_core::types::descriptor::TypeDescriptor;
use urm_core::types::filter::NameFilter;

use super::subtype_index::SubtypeIndex;
use crate::sources::SourceSet;

/// Result of scanning one namespace prefix.
#[derive(Debug, Clone, Default)]
pub struct NamespaceScan {
    pub prefix: String,
    /// Resolved types, sorted by name.
    pub types: Vec<TypeDescriptor>,
    /// Names that were discovered but no source could resolve.
    pub unresolved: Vec<String>,
}

/// Scans namespace prefixes against a fixed set of sources.
pub struct NamespaceScanner<'s, 'a> {
    sources: &'s SourceSet<'a>,
    allow_internal: bool,
}

impl<'s, 'a> NamespaceScanner<'s, 'a> {
    /// `allow_internal` is the internal-types flag as read once for the run.
    pub fn new(sources: &'s SourceSet<'a>, allow_internal: bool) -> Self {
        Self {
            sources,
            allow_internal,
        }
    }

    /// The filter used for `prefix`. Unless internal types are allowed, the
    /// reserved namespace is excluded even when `prefix` covers it.
    pub fn filter_for(&self, prefix: &str) -> NameFilter {
        let filter = NameFilter::including(prefix);
        if self.allow_internal {
            filter
        } else {
            filter.exclude(RESERVED_NAMESPACE)
        }
    }

    pub fn scan(&self, prefix: &str) -> NamespaceScan {
        let started = Instant::now();
        let filter = self.filter_for(prefix);

        let mut candidates = BTreeSet::new();
        let mut index = SubtypeIndex::new();
        for source in self.sources.iter() {
            candidates.extend(source.enumerate(&filter));
            index.extend(source.subtype_edges(&filter));
        }
        // Types only known through a supertype relation. Supertypes outside
        // the prefix act as roots but are never yielded themselves.
        candidates.extend(
            index
                .all_subtypes()
                .into_iter()
                .filter(|name| filter.accepts(name)),
        );

        let mut types = Vec::with_capacity(candidates.len());
        let mut unresolved = Vec::new();
        for name in candidates {
            match self.resolve(&name) {
                Ok(descriptor) => types.push(descriptor),
                Err(e) => {
                    // Non-fatal: one unloadable type must not hide the rest.
                    tracing::debug!(prefix, name = %name, error = %e, "skipping unresolvable type");
                    unresolved.push(name);
                }
            }
        }

        tracing::debug!(
            prefix,
            resolved = types.len(),
            unresolved = unresolved.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "namespace scanned"
        );

        NamespaceScan {
            prefix: prefix.to_string(),
            types,
            unresolved,
        }
    }

    /// First source that resolves `name` wins; the last error is kept
    /// for logging when none do.
    fn resolve(&self, name: &str) -> Result<TypeDescriptor, SourceError> {
        let mut last_error = None;
        for source in self.sources.iter() {
            match source.resolve(name) {
                Ok(descriptor) => return Ok(descriptor),
                Err(e) => last_error = Some(e),
            }
        }
        Err(last_error.unwrap_or_else(|| SourceError::Unresolvable {
            name: name.to_string(),
            source_label: String::new(),
        }))
    }
}
