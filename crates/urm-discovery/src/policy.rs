//! Filter policy applied to every scanned type before normalization.

use urm_core::constants::NAMESPACE_MARKERS;
use urm_core::types::collections::FxHashSet;
use urm_core::types::descriptor::TypeDescriptor;

/// Why a type was dropped. When several apply, the first in declaration
/// order is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exclusion {
    NamespaceMarker,
    Anonymous,
    IgnoredName,
    IgnoredSimpleName,
    IgnoredNamespace,
}

impl std::fmt::Display for Exclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NamespaceMarker => write!(f, "namespace marker"),
            Self::Anonymous => write!(f, "anonymous"),
            Self::IgnoredName => write!(f, "ignored name"),
            Self::IgnoredSimpleName => write!(f, "ignored simple name"),
            Self::IgnoredNamespace => write!(f, "ignored namespace"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterPolicy {
    ignores: FxHashSet<String>,
}

impl FilterPolicy {
    pub fn new<I, S>(ignores: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignores: ignores.into_iter().map(Into::into).collect(),
        }
    }

    pub fn exclusion(&self, ty: &TypeDescriptor) -> Option<Exclusion> {
        if NAMESPACE_MARKERS.contains(&ty.simple_name.as_str()) {
            Some(Exclusion::NamespaceMarker)
        } else if ty.is_anonymous() {
            Some(Exclusion::Anonymous)
        } else if self.ignores.contains(&ty.name) {
            Some(Exclusion::IgnoredName)
        } else if self.ignores.contains(&ty.simple_name) {
            Some(Exclusion::IgnoredSimpleName)
        } else if self.ignores.contains(&ty.namespace) {
            Some(Exclusion::IgnoredNamespace)
        } else {
            None
        }
    }

    pub fn apply(&self, types: Vec<TypeDescriptor>) -> Vec<TypeDescriptor> {
        types
            .into_iter()
            .filter(|ty| match self.exclusion(ty) {
                Some(reason) => {
                    tracing::trace!(name = %ty.name, %reason, "type excluded");
                    false
                }
                None => true,
            })
            .collect()
    }
}
