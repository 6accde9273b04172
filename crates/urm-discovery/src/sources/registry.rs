//! Process-global type registry, the "static" context every scan consults.

use std::sync::{OnceLock, PoisonError, RwLock};

use urm_core::errors::SourceError;
use urm_core::traits::{SubtypeEdge, TypeSource};
use urm_core::types::descriptor::TypeDescriptor;
use urm_core::types::filter::NameFilter;

use super::catalog::{TypeCatalog, TypeRecord};

pub const GLOBAL_LABEL: &str = "global";

#[derive(Debug)]
pub struct GlobalRegistry {
    catalog: RwLock<TypeCatalog>,
}

impl GlobalRegistry {
    fn new() -> Self {
        Self {
            catalog: RwLock::new(TypeCatalog::new(GLOBAL_LABEL)),
        }
    }

    pub fn register(&self, record: TypeRecord) {
        self.catalog
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(record);
    }

    pub fn len(&self) -> usize {
        self.read(|catalog| catalog.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read<T>(&self, f: impl FnOnce(&TypeCatalog) -> T) -> T {
        let guard = self.catalog.read().unwrap_or_else(PoisonError::into_inner);
        f(&*guard)
    }
}

impl TypeSource for GlobalRegistry {
    fn label(&self) -> &str {
        GLOBAL_LABEL
    }

    fn enumerate(&self, filter: &NameFilter) -> Vec<String> {
        self.read(|catalog| catalog.enumerate(filter))
    }

    fn subtype_edges(&self, filter: &NameFilter) -> Vec<SubtypeEdge> {
        self.read(|catalog| catalog.subtype_edges(filter))
    }

    fn resolve(&self, name: &str) -> Result<TypeDescriptor, SourceError> {
        self.read(|catalog| catalog.resolve(name))
    }
}

static GLOBAL: OnceLock<GlobalRegistry> = OnceLock::new();

/// The process-wide registry.
pub fn global() -> &'static GlobalRegistry {
    GLOBAL.get_or_init(GlobalRegistry::new)
}

/// Register a type with the process-wide registry.
pub fn register_global(record: TypeRecord) {
    global().register(record);
}
