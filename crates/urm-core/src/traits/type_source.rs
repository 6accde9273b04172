use crate::errors::SourceError;
use crate::types::descriptor::TypeDescriptor;
use crate::types::filter::NameFilter;

/// A `supertype -> subtype` relation recorded by a source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubtypeEdge {
    pub supertype: String,
    pub subtype: String,
}

impl SubtypeEdge {
    pub fn new(supertype: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self {
            supertype: supertype.into(),
            subtype: subtype.into(),
        }
    }
}

/// A provider of compiled types: the running process, a global registry,
/// a class directory, an archive, or a pre-built index.
///
/// Sources may overlap; the engine never assumes they are disjoint.
pub trait TypeSource: Send + Sync {
    /// Short provenance label, used in logs and in [`TypeDescriptor::origin`].
    fn label(&self) -> &str;

    /// Names of every type this source knows that `filter` accepts.
    fn enumerate(&self, filter: &NameFilter) -> Vec<String>;

    /// Supertype relations whose subtype `filter` accepts.
    fn subtype_edges(&self, _filter: &NameFilter) -> Vec<SubtypeEdge> {
        Vec::new()
    }

    /// Resolve one name to a descriptor.
    fn resolve(&self, name: &str) -> Result<TypeDescriptor, SourceError>;
}
