//! Pre-built JSON type index.
//!
//! ```json
//! {
//!   "types": [
//!     { "name": "com.example.shapes.Circle", "supertypes": ["com.example.shapes.Shape"] }
//!   ],
//!   "subtypes": {
//!     "com.example.shapes.Shape": ["com.example.shapes.Circle"]
//!   }
//! }
//! ```
//!
//! `subtypes` may name types with no entry in `types`; those are discovered
//! but fail to resolve.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use urm_core::errors::SourceError;
use urm_core::traits::{SubtypeEdge, TypeSource};
use urm_core::types::descriptor::TypeDescriptor;
use urm_core::types::filter::NameFilter;

use super::catalog::{TypeCatalog, TypeRecord};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeIndex {
    pub types: Vec<TypeRecord>,
    pub subtypes: BTreeMap<String, Vec<String>>,
}

#[derive(Debug)]
pub struct IndexFileSource {
    catalog: TypeCatalog,
}

impl IndexFileSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let index: TypeIndex =
            serde_json::from_str(&raw).map_err(|source| SourceError::IndexParse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_index(path, index))
    }

    pub fn from_index(path: &Path, index: TypeIndex) -> Self {
        let mut catalog = TypeCatalog::new(path.display().to_string());
        for record in index.types {
            catalog.insert(record);
        }
        for (supertype, subtypes) in index.subtypes {
            for subtype in subtypes {
                catalog.relate(supertype.as_str(), subtype);
            }
        }
        Self { catalog }
    }
}

impl TypeSource for IndexFileSource {
    fn label(&self) -> &str {
        self.catalog.label()
    }

    fn enumerate(&self, filter: &NameFilter) -> Vec<String> {
        self.catalog.enumerate(filter)
    }

    fn subtype_edges(&self, filter: &NameFilter) -> Vec<SubtypeEdge> {
        self.catalog.subtype_edges(filter)
    }

    fn resolve(&self, name: &str) -> Result<TypeDescriptor, SourceError> {
        self.catalog.resolve(name)
    }
}
