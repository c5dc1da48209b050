//! Bounded top-k selection.
//!
//! Maintains at most `k` items; once full, a new item replaces the
//! current minimum only when strictly greater, so among equal items the
//! first seen is retained.

/// A bounded structure keeping the `k` greatest items pushed into it.
///
/// ```
/// use set_engine::util::BoundedTopK;
///
/// let mut top = BoundedTopK::new(2);
/// for n in [3, 1, 4, 1, 5] {
///     top.push(n);
/// }
/// assert_eq!(top.into_sorted_vec(), vec![5, 4]);
/// ```
#[derive(Clone, Debug)]
pub struct BoundedTopK<T> {
    capacity: usize,
    entries: Vec<Entry<T>>,
    seq: u64,
}

#[derive(Clone, Debug)]
struct Entry<T> {
    item: T,
    seq: u64,
}

impl<T: Ord> BoundedTopK<T> {
    /// Create a selector keeping at most `capacity` items.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
            seq: 0,
        }
    }

    /// Offer an item.
    ///
    /// Kept outright while under capacity; afterwards it evicts the
    /// current minimum only if strictly greater than it. An item equal to
    /// the minimum is dropped, which keeps the first-seen occupant.
    pub fn push(&mut self, item: T) {
        let seq = self.seq;
        self.seq += 1;

        if self.entries.len() < self.capacity {
            self.entries.push(Entry { item, seq });
            return;
        }

        let Some(min_idx) = self.min_index() else {
            return; // zero capacity
        };
        if item > self.entries[min_idx].item {
            self.entries[min_idx] = Entry { item, seq };
        }
    }

    /// Number of items currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no items are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume into a vector, greatest first; equal items stay in
    /// first-seen order.
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.entries
            .sort_by(|a, b| b.item.cmp(&a.item).then(a.seq.cmp(&b.seq)));
        self.entries.into_iter().map(|e| e.item).collect()
    }

    /// Index of the current minimum; among equal minimums the
    /// latest-seen, so evictions never displace an earlier arrival ahead
    /// of a later equal one.
    fn min_index(&self) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.item.cmp(&b.item).then(b.seq.cmp(&a.seq)))
            .map(|(i, _)| i)
    }
}
