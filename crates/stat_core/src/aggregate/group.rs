//! Grouping and extremum primitives shared by every ranking query.
//!
//! Groups remember the order their keys were first seen. Extremum selection
//! walks groups in that order and only replaces the current pick on a
//! strictly better rank, so ties resolve to the earliest-created group.

use crate::error::{Result, StatError};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::hash::Hash;

/// Key → accumulator map that keeps first-seen key order.
#[derive(Debug, Clone)]
pub struct Groups<K, A> {
    slots: FxHashMap<K, usize>,
    entries: Vec<(K, A)>,
}

impl<K: Hash + Eq + Clone, A> Groups<K, A> {
    pub fn new() -> Self {
        Self {
            slots: FxHashMap::default(),
            entries: Vec::new(),
        }
    }

    /// Accumulator for `key`, created with `init` on first sight.
    pub fn entry_or_insert_with(&mut self, key: K, init: impl FnOnce() -> A) -> &mut A {
        let slot = match self.slots.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.slots.insert(key.clone(), slot);
                self.entries.push((key, init()));
                slot
            }
        };
        &mut self.entries[slot].1
    }

    pub fn get(&self, key: &K) -> Option<&A> {
        self.slots.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Groups in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &A)> {
        self.entries.iter().map(|(key, acc)| (key, acc))
    }

    pub fn into_entries(self) -> Vec<(K, A)> {
        self.entries
    }

    /// Pick the group with the largest (`Max`) or smallest (`Min`) rank.
    ///
    /// Ties keep the group created first. `None` only when there are no
    /// groups.
    pub fn select<R: Ord>(
        &self,
        direction: Extremum,
        rank: impl Fn(&A) -> R,
    ) -> Option<(&K, &A)> {
        let mut best: Option<(&K, &A, R)> = None;
        for (key, acc) in self.iter() {
            let candidate = rank(acc);
            let replace = match &best {
                None => true,
                Some((_, _, current)) => direction.prefers(candidate.cmp(current)),
            };
            if replace {
                best = Some((key, acc, candidate));
            }
        }
        best.map(|(key, acc, _)| (key, acc))
    }
}

impl<K: Hash + Eq + Clone, A> Default for Groups<K, A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold `items` into groups keyed by `key`, seeding each with `init`.
pub fn group_by<T, K, A>(
    items: impl IntoIterator<Item = T>,
    key: impl Fn(&T) -> K,
    init: impl Fn() -> A,
    fold: impl Fn(&mut A, &T),
) -> Groups<K, A>
where
    K: Hash + Eq + Clone,
{
    let mut groups = Groups::new();
    for item in items {
        let acc = groups.entry_or_insert_with(key(&item), &init);
        fold(acc, &item);
    }
    groups
}

/// Which end of the ranking a query wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Max,
    Min,
}

impl Extremum {
    /// Whether a candidate comparing `ord` against the current pick wins.
    /// Equal never wins.
    fn prefers(self, ord: Ordering) -> bool {
        match self {
            Extremum::Max => ord == Ordering::Greater,
            Extremum::Min => ord == Ordering::Less,
        }
    }
}

/// Rankable quotient.
///
/// A zero denominator ranks above every finite value; reading its value
/// is a `ZeroDenominator` error.
#[derive(Debug, Clone, Copy)]
pub enum Ratio {
    Finite(f64),
    Unbounded,
}

impl Ratio {
    pub fn of(numerator: u64, denominator: u64) -> Self {
        if denominator == 0 {
            Ratio::Unbounded
        } else {
            Ratio::Finite(numerator as f64 / denominator as f64)
        }
    }

    /// A plain count ranked as-is.
    pub fn count(value: u64) -> Self {
        Ratio::Finite(value as f64)
    }

    pub fn value(self, group: impl FnOnce() -> String) -> Result<f64> {
        match self {
            Ratio::Finite(v) => Ok(v),
            Ratio::Unbounded => Err(StatError::ZeroDenominator { group: group() }),
        }
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Ratio::Finite(a), Ratio::Finite(b)) => a.total_cmp(b),
            (Ratio::Finite(_), Ratio::Unbounded) => Ordering::Less,
            (Ratio::Unbounded, Ratio::Finite(_)) => Ordering::Greater,
            (Ratio::Unbounded, Ratio::Unbounded) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ratio {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ratio {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_keeps_first_seen_order() {
        let words = ["b", "a", "b", "c", "a", "b"];
        let groups = group_by(words, |w| w.to_string(), || 0u32, |n, _| *n += 1);

        let order: Vec<(&str, u32)> = groups.iter().map(|(k, n)| (k.as_str(), *n)).collect();
        assert_eq!(order, vec![("b", 3), ("a", 2), ("c", 1)]);
        assert_eq!(groups.get(&"a".to_string()), Some(&2));
    }

    #[test]
    fn test_select_ties_go_to_earliest_group() {
        let groups = group_by([3u32, 1, 3, 1], |v| *v, || 0u32, |n, _| *n += 1);
        // both groups have count 2
        let (max_key, _) = groups.select(Extremum::Max, |n| *n).unwrap();
        let (min_key, _) = groups.select(Extremum::Min, |n| *n).unwrap();
        assert_eq!(*max_key, 3);
        assert_eq!(*min_key, 3);
    }

    #[test]
    fn test_select_on_empty_groups() {
        let groups: Groups<u32, u32> = Groups::new();
        assert!(groups.select(Extremum::Max, |n| *n).is_none());
    }

    #[test]
    fn test_ratio_ordering() {
        assert!(Ratio::of(1, 4) < Ratio::of(1, 2));
        assert!(Ratio::of(100, 1) < Ratio::of(0, 0));
        assert_eq!(Ratio::of(1, 2), Ratio::of(2, 4));
        assert_eq!(Ratio::Unbounded, Ratio::of(5, 0));
    }

    #[test]
    fn test_ratio_value() {
        assert_eq!(Ratio::of(3, 4).value(|| "x".into()), Ok(0.75));
        assert_eq!(
            Ratio::of(3, 0).value(|| "team 9".into()),
            Err(StatError::ZeroDenominator {
                group: "team 9".to_string()
            })
        );
    }
}
