//! Supertype → subtypes index, built once per namespace scan.

use std::collections::VecDeque;

use urm_core::traits::SubtypeEdge;
use urm_core::types::collections::{FxHashMap, FxHashSet};

#[derive(Debug, Default)]
pub struct SubtypeIndex {
    subtypes: FxHashMap<String, FxHashSet<String>>,
}

impl SubtypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, edge: SubtypeEdge) {
        self.subtypes
            .entry(edge.supertype)
            .or_default()
            .insert(edge.subtype);
    }

    /// Every type that has at least one recorded subtype.
    pub fn supertypes(&self) -> impl Iterator<Item = &str> {
        self.subtypes.keys().map(String::as_str)
    }

    /// Direct subtypes of `supertype`.
    pub fn direct_subtypes(&self, supertype: &str) -> impl Iterator<Item = &str> {
        self.subtypes
            .get(supertype)
            .into_iter()
            .flat_map(|subs| subs.iter().map(String::as_str))
    }

    /// Transitive subtypes of `supertype`, excluding itself unless a cycle
    /// leads back to it.
    pub fn subtypes_of(&self, supertype: &str) -> FxHashSet<String> {
        self.reachable_from(std::iter::once(supertype))
    }

    /// Every type transitively below any of `roots`. Cycle-safe.
    pub fn reachable_from<'r>(&self, roots: impl IntoIterator<Item = &'r str>) -> FxHashSet<String> {
        let mut reached = FxHashSet::default();
        let mut queue: VecDeque<&str> = roots.into_iter().collect();

        while let Some(current) = queue.pop_front() {
            for subtype in self.direct_subtypes(current) {
                if reached.insert(subtype.to_string()) {
                    queue.push_back(subtype);
                }
            }
        }
        reached
    }

    /// Every type reachable from any recorded supertype.
    pub fn all_subtypes(&self) -> FxHashSet<String> {
        self.reachable_from(self.supertypes())
    }

    pub fn len(&self) -> usize {
        self.subtypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subtypes.is_empty()
    }
}

impl Extend<SubtypeEdge> for SubtypeIndex {
    fn extend<T: IntoIterator<Item = SubtypeEdge>>(&mut self, iter: T) {
        for edge in iter {
            self.insert(edge);
        }
    }
}

impl FromIterator<SubtypeEdge> for SubtypeIndex {
    fn from_iter<T: IntoIterator<Item = SubtypeEdge>>(iter: T) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}
