//! The type descriptor handed to the domain-model builder.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::namespace::{namespace_of, simple_name_of};

/// One discovered compiled type.
///
/// Identity is the fully-qualified `name`: equality, hashing, and ordering
/// ignore every other field, so the same type seen through two sources
/// collapses to one entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Fully-qualified binary name, e.g. `com.example.Outer$Inner`.
    pub name: String,
    /// Unqualified name; empty for anonymous types.
    pub simple_name: String,
    /// Owning namespace; empty for the root namespace.
    pub namespace: String,
    /// Direct supertypes recorded by the source.
    pub supertypes: SmallVec<[String; 2]>,
    /// Label of the source that resolved this type.
    pub origin: String,
}

impl TypeDescriptor {
    /// Build a descriptor, deriving simple name and namespace from `name`.
    pub fn new(name: impl Into<String>, origin: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            simple_name: simple_name_of(&name).to_string(),
            namespace: namespace_of(&name).to_string(),
            name,
            supertypes: SmallVec::new(),
            origin: origin.into(),
        }
    }

    pub fn with_supertypes<I, S>(mut self, supertypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supertypes = supertypes.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_anonymous(&self) -> bool {
        self.simple_name.is_empty()
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for TypeDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeDescriptor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl std::fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
