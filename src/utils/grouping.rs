/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Order-preserving grouping helpers

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::AddAssign;

/// Sum values per key, keeping keys in first-seen order
pub fn accumulate_ordered<K, V, I>(pairs: I) -> Vec<(K, V)>
where
    K: PartialEq,
    V: AddAssign,
    I: IntoIterator<Item = (K, V)>,
{
    let mut groups: Vec<(K, V)> = Vec::new();
    for (key, value) in pairs {
        match groups.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, total)) => *total += value,
            None => groups.push((key, value)),
        }
    }
    groups
}

/// Positions of the items sharing each key, in input order within a group
pub fn group_indices<T, K, F>(items: &[T], key: F) -> HashMap<K, Vec<usize>>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut groups: HashMap<K, Vec<usize>> = HashMap::new();
    for (index, item) in items.iter().enumerate() {
        groups.entry(key(item)).or_default().push(index);
    }
    groups
}

/// All `(a, b)` pairs, `a` outer and `b` inner
pub fn cartesian_product<'a, A, B>(
    outer: &'a [A],
    inner: &'a [B],
) -> impl Iterator<Item = (&'a A, &'a B)> + 'a {
    outer
        .iter()
        .flat_map(move |a| inner.iter().map(move |b| (a, b)))
}
