//! Include/exclude namespace filter applied to type names before resolution.

use smallvec::SmallVec;

use super::namespace::{is_under, namespace_of};

/// Accepts a type when its owning namespace is under at least one include
/// prefix and under no exclude prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameFilter {
    includes: SmallVec<[String; 2]>,
    excludes: SmallVec<[String; 2]>,
}

impl NameFilter {
    /// A filter accepting everything under `prefix`.
    pub fn including(prefix: impl Into<String>) -> Self {
        Self::default().include(prefix)
    }

    pub fn include(mut self, prefix: impl Into<String>) -> Self {
        self.includes.push(prefix.into());
        self
    }

    pub fn exclude(mut self, prefix: impl Into<String>) -> Self {
        self.excludes.push(prefix.into());
        self
    }

    pub fn accepts(&self, name: &str) -> bool {
        let namespace = namespace_of(name);
        self.includes.iter().any(|prefix| is_under(namespace, prefix))
            && !self.excludes.iter().any(|prefix| is_under(namespace, prefix))
    }
}
