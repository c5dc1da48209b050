//! The set completion solver.
//!
//! Over a 3-valued domain, any valid set satisfies `a + b + c ≡ 0 (mod 3)`
//! at every attribute position: if all three values are equal the sum is
//! `3a ≡ 0`, and the three distinct values sum to `0 + 1 + 2 ≡ 0`. The
//! unique completion of a pair is therefore `-(a + b) mod 3` per position.

use crate::cards::{Card, ATTRIBUTES};
use crate::core::EngineError;

/// Compute the unique third card completing `a` and `b` into a valid set.
///
/// Fails with [`EngineError::InvalidPair`] when `a == b`: two identical
/// cards cannot be completed into a set of three distinct cards.
///
/// ```
/// use set_engine::cards::Card;
/// use set_engine::rules::complete_set;
///
/// let third = complete_set(Card::new([0, 0, 0, 0]), Card::new([1, 1, 1, 1]));
/// assert_eq!(third, Ok(Card::new([2, 2, 2, 2])));
/// ```
pub fn complete_set(a: Card, b: Card) -> Result<Card, EngineError> {
    if a == b {
        return Err(EngineError::InvalidPair(a));
    }

    let mut values = [0u8; ATTRIBUTES];
    for (i, value) in values.iter_mut().enumerate() {
        // -(x + y) mod 3; x + y <= 4 so 6 keeps the subtraction unsigned.
        *value = (6 - a.value(i) - b.value(i)) % 3;
    }

    Ok(Card::new(values))
}
