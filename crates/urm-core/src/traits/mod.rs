//! Trait seams between the engine and the places types come from.

mod type_source;

pub use type_source::{SubtypeEdge, TypeSource};
