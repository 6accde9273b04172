pub mod aggregator;
pub mod archive;
pub mod catalog;
pub mod classfile;
pub mod directory;
pub mod index_file;
pub mod location;
pub mod registry;

pub use aggregator::{AdditionalSource, SourceSet};
pub use catalog::{TypeCatalog, TypeRecord};
pub use directory::WalkOptions;
pub use registry::{global, register_global, GlobalRegistry};
