//! The card model.
//!
//! A card is an ordered 4-tuple of attribute values, each drawn from
//! `{0, 1, 2}`. The engine never interprets the attributes (color, shape,
//! shading, count in the physical game) — only their combinatorics matter.

use serde::{Deserialize, Serialize};

/// Number of attribute positions on a card.
pub const ATTRIBUTES: usize = 4;

/// Number of values each attribute can take.
pub const VALUES: u8 = 3;

/// Total distinct cards: 3^4.
pub const DECK_SIZE: usize = 81;

/// A single card: four attribute values in `{0, 1, 2}`.
///
/// Immutable; equality and hashing are structural.
///
/// ```
/// use set_engine::cards::Card;
///
/// let a = Card::new([0, 1, 2, 0]);
/// let b = Card::new([0, 1, 2, 0]);
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card(pub [u8; ATTRIBUTES]);

impl Card {
    /// Create a card from its four attribute values.
    ///
    /// Values must be in `0..3`.
    #[must_use]
    pub fn new(values: [u8; ATTRIBUTES]) -> Self {
        debug_assert!(values.iter().all(|&v| v < VALUES));
        Self(values)
    }

    /// The value at the given attribute position.
    #[must_use]
    pub const fn value(self, position: usize) -> u8 {
        self.0[position]
    }

    /// All four attribute values in position order.
    #[must_use]
    pub const fn values(self) -> [u8; ATTRIBUTES] {
        self.0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{},{},{})",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}
