pub mod scanner;
pub mod subtype_index;

pub use scanner::{NamespaceScan, NamespaceScanner};
pub use subtype_index::SubtypeIndex;
