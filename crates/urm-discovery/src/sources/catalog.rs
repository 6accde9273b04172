//! In-memory type catalog.
//!
//! Backs the process default source, the global registry, and pre-built
//! index files. Records are kept in a `BTreeMap` so enumeration order is
//! stable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use urm_core::errors::SourceError;
use urm_core::traits::{SubtypeEdge, TypeSource};
use urm_core::types::descriptor::TypeDescriptor;
use urm_core::types::filter::NameFilter;

/// One known type and its direct supertypes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRecord {
    pub name: String,
    #[serde(default)]
    pub supertypes: Vec<String>,
}

impl TypeRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supertypes: Vec::new(),
        }
    }

    pub fn extending(mut self, supertype: impl Into<String>) -> Self {
        self.supertypes.push(supertype.into());
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    label: String,
    records: BTreeMap<String, TypeRecord>,
    /// Relations known without a loadable record for the subtype.
    relations: Vec<SubtypeEdge>,
}

impl TypeCatalog {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Catalog of plain types with no recorded supertypes.
    pub fn with_types<I, S>(label: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::new(label);
        for name in names {
            catalog.insert(TypeRecord::new(name));
        }
        catalog
    }

    /// Insert or replace a record.
    pub fn insert(&mut self, record: TypeRecord) {
        self.records.insert(record.name.clone(), record);
    }

    /// Record a `supertype -> subtype` relation without registering the subtype.
    pub fn relate(&mut self, supertype: impl Into<String>, subtype: impl Into<String>) {
        self.relations.push(SubtypeEdge::new(supertype, subtype));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TypeSource for TypeCatalog {
    fn label(&self) -> &str {
        &self.label
    }

    fn enumerate(&self, filter: &NameFilter) -> Vec<String> {
        self.records
            .keys()
            .filter(|name| filter.accepts(name))
            .cloned()
            .collect()
    }

    fn subtype_edges(&self, filter: &NameFilter) -> Vec<SubtypeEdge> {
        let recorded = self
            .records
            .values()
            .filter(|record| filter.accepts(&record.name))
            .flat_map(|record| {
                record
                    .supertypes
                    .iter()
                    .map(|supertype| SubtypeEdge::new(supertype.as_str(), record.name.as_str()))
            });
        let related = self
            .relations
            .iter()
            .filter(|edge| filter.accepts(&edge.subtype))
            .cloned();
        recorded.chain(related).collect()
    }

    fn resolve(&self, name: &str) -> Result<TypeDescriptor, SourceError> {
        self.records
            .get(name)
            .map(|record| {
                TypeDescriptor::new(record.name.as_str(), self.label.as_str())
                    .with_supertypes(record.supertypes.iter().map(String::as_str))
            })
            .ok_or_else(|| SourceError::Unresolvable {
                name: name.to_string(),
                source_label: self.label.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shapes() -> TypeCatalog {
        let mut catalog = TypeCatalog::new("shapes");
        catalog.insert(TypeRecord::new("com.example.shapes.Shape"));
        catalog.insert(TypeRecord::new("com.example.shapes.Circle").extending("com.example.shapes.Shape"));
        catalog.insert(TypeRecord::new("com.example.colors.Red"));
        catalog.relate("com.example.shapes.Shape", "com.example.shapes.Ghost");
        catalog
    }

    #[test]
    fn enumerate_respects_filter_and_order() {
        let names = shapes().enumerate(&NameFilter::including("com.example.shapes"));
        assert_eq!(names, vec!["com.example.shapes.Circle", "com.example.shapes.Shape"]);
    }

    #[test]
    fn edges_include_records_and_relations() {
        let edges = shapes().subtype_edges(&NameFilter::including("com.example.shapes"));
        assert_eq!(edges.len(), 2);
        assert!(edges.contains(&SubtypeEdge::new("com.example.shapes.Shape", "com.example.shapes.Ghost")));
    }

    #[test]
    fn related_only_types_do_not_resolve() {
        let catalog = shapes();
        let circle = catalog.resolve("com.example.shapes.Circle").unwrap();
        assert_eq!(circle.origin, "shapes");
        assert_eq!(circle.supertypes.to_vec(), vec!["com.example.shapes.Shape".to_string()]);
        assert!(matches!(
            catalog.resolve("com.example.shapes.Ghost"),
            Err(SourceError::Unresolvable { .. })
        ));
    }
}
