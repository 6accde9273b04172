//! # urm-discovery
//!
//! Type discovery engine for URM.
//! Aggregates type sources, scans namespace prefixes, applies the ignore
//! policy, and normalizes the result into a canonical, deduplicated list
//! for the domain-model builder.

#![allow(clippy::module_inception)]

pub mod finder;
pub mod normalize;
pub mod policy;
pub mod scanner;
pub mod sources;

pub use finder::{DiscoveryRequest, DomainTypeFinder};
pub use policy::{Exclusion, FilterPolicy};
pub use sources::{AdditionalSource, TypeCatalog, TypeRecord};
