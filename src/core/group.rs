//! Ordered grouping shared by every aggregation
//!
//! Keys iterate in order of first occurrence, so tie-breaks that depend on
//! iteration order are reproducible for identical inputs.

use std::collections::HashMap;
use std::hash::Hash;

/// Groups keyed by `K`, iterated in first-seen order
#[derive(Debug, Clone)]
pub(crate) struct Grouped<K, V> {
    index: HashMap<K, usize>,
    groups: Vec<(K, V)>,
}

impl<K, V> Default for Grouped<K, V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }
}

impl<K: Hash + Eq + Clone, V> Grouped<K, V> {
    /// Accumulator for `key`, created with `init` on first sight
    pub(crate) fn entry_or_insert_with(&mut self, key: K, init: impl FnOnce() -> V) -> &mut V {
        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                let idx = self.groups.len();
                self.index.insert(key.clone(), idx);
                self.groups.push((key, init()));
                idx
            }
        };
        &mut self.groups[idx].1
    }

    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&idx| &self.groups[idx].1)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.groups.iter().map(|(k, v)| (k, v))
    }

    pub(crate) fn into_vec(self) -> Vec<(K, V)> {
        self.groups
    }
}

/// Group `items` by `key`, folding each item into its group's accumulator
pub(crate) fn group_by<'a, T, K, V, KF, FF>(items: &'a [T], key: KF, mut fold: FF) -> Grouped<K, V>
where
    K: Hash + Eq + Clone,
    V: Default,
    KF: Fn(&'a T) -> K,
    FF: FnMut(&mut V, &'a T),
{
    let mut grouped = Grouped::default();
    for item in items {
        let acc = grouped.entry_or_insert_with(key(item), V::default);
        fold(acc, item);
    }
    grouped
}
