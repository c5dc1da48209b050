//! The set validity oracle.

use crate::cards::{Card, ATTRIBUTES};

/// Check whether three cards form a valid set.
///
/// For each attribute position, the three values must be all equal or all
/// distinct; a position with exactly two distinct values invalidates the
/// whole group. Pure function.
///
/// ```
/// use set_engine::cards::Card;
/// use set_engine::rules::is_valid_set;
///
/// let a = Card::new([0, 1, 2, 0]);
/// let b = Card::new([1, 2, 0, 1]);
/// let c = Card::new([2, 0, 1, 2]);
/// assert!(is_valid_set(a, b, c));
/// ```
#[must_use]
pub fn is_valid_set(a: Card, b: Card, c: Card) -> bool {
    (0..ATTRIBUTES).all(|i| {
        let (x, y, z) = (a.value(i), b.value(i), c.value(i));
        let all_equal = x == y && y == z;
        let all_distinct = x != y && y != z && x != z;
        all_equal || all_distinct
    })
}
