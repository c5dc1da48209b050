//! Two-level counting map.
//!
//! Outer key → inner key → count, with insert-if-absent-then-increment
//! semantics made explicit rather than relying on exception-free lookup.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A nested counter: `outer → inner → u64`.
///
/// ```
/// use set_engine::util::NestedCounter;
///
/// let mut counter: NestedCounter<&str, &str> = NestedCounter::new();
/// counter.increment("2024", "track-a");
/// counter.increment("2024", "track-a");
/// counter.increment("2024", "track-b");
///
/// assert_eq!(counter.get(&"2024", &"track-a"), 2);
/// assert_eq!(counter.get(&"2025", &"track-a"), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct NestedCounter<K, I> {
    counts: FxHashMap<K, FxHashMap<I, u64>>,
}

impl<K: Eq + Hash, I: Eq + Hash> NestedCounter<K, I> {
    /// Create an empty counter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: FxHashMap::default(),
        }
    }

    /// Insert the pair if absent, then increment its count.
    pub fn increment(&mut self, outer: K, inner: I) {
        *self
            .counts
            .entry(outer)
            .or_default()
            .entry(inner)
            .or_insert(0) += 1;
    }

    /// Count for a pair; absent pairs count zero.
    #[must_use]
    pub fn get(&self, outer: &K, inner: &I) -> u64 {
        self.counts
            .get(outer)
            .and_then(|m| m.get(inner))
            .copied()
            .unwrap_or(0)
    }

    /// The inner counts for an outer key, if any were recorded.
    #[must_use]
    pub fn inner(&self, outer: &K) -> Option<&FxHashMap<I, u64>> {
        self.counts.get(outer)
    }

    /// Iterate over outer keys and their inner count maps.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &FxHashMap<I, u64>)> {
        self.counts.iter()
    }

    /// Number of distinct outer keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether nothing has been counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_get() {
        let mut counter: NestedCounter<&str, u32> = NestedCounter::new();
        counter.increment("a", 1);
        counter.increment("a", 1);
        counter.increment("a", 2);
        counter.increment("b", 1);

        assert_eq!(counter.get(&"a", &1), 2);
        assert_eq!(counter.get(&"a", &2), 1);
        assert_eq!(counter.get(&"b", &1), 1);
        assert_eq!(counter.get(&"b", &2), 0);
        assert_eq!(counter.get(&"c", &1), 0);
    }

    #[test]
    fn test_inner_view() {
        let mut counter: NestedCounter<&str, &str> = NestedCounter::new();
        counter.increment("outer", "x");
        counter.increment("outer", "y");

        let inner = counter.inner(&"outer").unwrap();
        assert_eq!(inner.len(), 2);
        assert!(counter.inner(&"missing").is_none());
    }

    #[test]
    fn test_len_counts_outer_keys() {
        let mut counter: NestedCounter<u8, u8> = NestedCounter::new();
        assert!(counter.is_empty());

        counter.increment(1, 1);
        counter.increment(1, 2);
        counter.increment(2, 1);
        assert_eq!(counter.len(), 2);
    }
}
