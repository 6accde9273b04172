//! Result normalization: merge per-namespace sets, drop duplicates by
//! qualified name, sort ordinally.

use std::collections::BTreeMap;

use urm_core::types::descriptor::TypeDescriptor;

/// Merge `sets` into one canonical sequence.
///
/// The first occurrence of a name in input order is kept. `String` ordering
/// is byte-wise, so the output is stable across platforms and locales.
pub fn normalize<I>(sets: I) -> Vec<TypeDescriptor>
where
    I: IntoIterator<Item = Vec<TypeDescriptor>>,
{
    let mut merged: BTreeMap<String, TypeDescriptor> = BTreeMap::new();
    for ty in sets.into_iter().flatten() {
        merged.entry(ty.name.clone()).or_insert(ty);
    }
    merged.into_values().collect()
}

/// True when `types` is strictly ascending by name: sorted, no duplicates.
pub fn is_canonical(types: &[TypeDescriptor]) -> bool {
    types.windows(2).all(|pair| pair[0].name < pair[1].name)
}
