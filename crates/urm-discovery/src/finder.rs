//! Top-level entry point: discover the domain types under a set of
//! namespaces.

use std::time::Instant;

use rayon::prelude::*;

use urm_core::config::DiscoveryConfig;
use urm_core::constants::NAMESPACE_SEPARATOR;
use urm_core::errors::{DiscoveryError, DiscoveryResult};
use urm_core::flags::{self, StickyFlag};
use urm_core::traits::TypeSource;
use urm_core::types::collections::FxHashSet;
use urm_core::types::descriptor::TypeDescriptor;

use crate::normalize::{is_canonical, normalize};
use crate::policy::FilterPolicy;
use crate::scanner::NamespaceScanner;
use crate::sources::{self, AdditionalSource, SourceSet, WalkOptions};

/// Parameters for one discovery run.
#[derive(Debug)]
pub struct DiscoveryRequest<'a> {
    pub namespaces: Vec<String>,
    pub ignores: Vec<String>,
    pub additional: Option<AdditionalSource<'a>>,
    /// Raise the process-wide internal-types flag before scanning.
    pub allow_internal_types: bool,
    /// Scan namespaces on the rayon pool.
    pub parallel: bool,
    pub walk: WalkOptions,
}

impl<'a> DiscoveryRequest<'a> {
    pub fn new<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            namespaces: namespaces.into_iter().map(Into::into).collect(),
            ignores: Vec::new(),
            additional: None,
            allow_internal_types: false,
            parallel: true,
            walk: WalkOptions::default(),
        }
    }

    pub fn from_config(config: &DiscoveryConfig) -> Self {
        let mut request = Self::new(config.namespaces.iter().cloned())
            .with_ignores(config.ignores.iter().cloned());
        if !config.sources.is_empty() {
            request.additional = Some(AdditionalSource::Locations(config.sources.clone()));
        }
        request.allow_internal_types = config.effective_allow_internal_types();
        request.parallel = config.effective_parallel();
        request.walk = WalkOptions {
            threads: config.effective_threads(),
            follow_symlinks: config.effective_follow_symlinks(),
        };
        request
    }

    pub fn with_ignores<I, S>(mut self, ignores: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignores = ignores.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_additional(mut self, additional: AdditionalSource<'a>) -> Self {
        self.additional = Some(additional);
        self
    }

    pub fn allowing_internal_types(mut self) -> Self {
        self.allow_internal_types = true;
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// Finds domain types for a caller whose own loaded types form the default
/// source.
pub struct DomainTypeFinder<'a> {
    default_source: &'a dyn TypeSource,
    global_source: &'a dyn TypeSource,
    internal_flag: &'a StickyFlag,
}

impl<'a> DomainTypeFinder<'a> {
    /// Uses the process-wide registry and internal-types flag.
    pub fn new(default_source: &'a dyn TypeSource) -> Self {
        Self {
            default_source,
            global_source: sources::global(),
            internal_flag: &flags::INTERNAL_TYPES,
        }
    }

    pub fn with_global(mut self, global_source: &'a dyn TypeSource) -> Self {
        self.global_source = global_source;
        self
    }

    pub fn with_internal_flag(mut self, flag: &'a StickyFlag) -> Self {
        self.internal_flag = flag;
        self
    }

    /// Discover, filter, and normalize the types under `request.namespaces`.
    ///
    /// Fails only when no usable namespace is given. Malformed locations and
    /// unresolvable types are logged and skipped.
    pub fn find_types(&self, request: &DiscoveryRequest<'a>) -> DiscoveryResult<Vec<TypeDescriptor>> {
        let namespaces = validate_namespaces(&request.namespaces)?;
        let started = Instant::now();

        if request.allow_internal_types {
            self.internal_flag.raise();
        }
        let allow_internal = self.internal_flag.is_raised();

        let sources = SourceSet::assemble(
            self.default_source,
            self.global_source,
            request.additional.as_ref(),
            &request.walk,
        );
        let scanner = NamespaceScanner::new(&sources, allow_internal);
        let policy = FilterPolicy::new(request.ignores.iter().cloned());

        let scan_one = |prefix: &&str| policy.apply(scanner.scan(prefix).types);
        let per_namespace: Vec<Vec<TypeDescriptor>> = if request.parallel && namespaces.len() > 1 {
            namespaces.par_iter().map(scan_one).collect()
        } else {
            namespaces.iter().map(scan_one).collect()
        };

        let types = normalize(per_namespace);
        debug_assert!(is_canonical(&types));
        tracing::info!(
            namespaces = namespaces.len(),
            sources = sources.len(),
            types = types.len(),
            allow_internal,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "domain types discovered"
        );
        Ok(types)
    }
}

/// Trim whitespace and trailing separators, reject blanks, and drop repeated
/// prefixes while keeping order.
pub fn validate_namespaces(namespaces: &[String]) -> DiscoveryResult<Vec<&str>> {
    if namespaces.is_empty() {
        return Err(DiscoveryError::NoNamespaces);
    }
    let mut seen = FxHashSet::default();
    let mut valid = Vec::with_capacity(namespaces.len());
    for (position, namespace) in namespaces.iter().enumerate() {
        let trimmed = namespace.trim().trim_end_matches(NAMESPACE_SEPARATOR);
        if trimmed.is_empty() {
            return Err(DiscoveryError::BlankNamespace { position });
        }
        if seen.insert(trimmed) {
            valid.push(trimmed);
        }
    }
    Ok(valid)
}
