//! The table: the ordered pool of dealt, unclaimed cards.
//!
//! Steady state is 12 cards. The table transiently drops below 12 once the
//! deck runs dry, and exceeds 12 when a 3-card top-up lands on a full table
//! that holds no set.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;

/// The dealt-card pool.
///
/// Order is significant: the table search enumerates positions in dealing
/// order, which makes set discovery deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// A set-free table caps at 20 cards, so 21 covers every reachable
    /// size without spilling to the heap.
    cards: SmallVec<[Card; 21]>,
}

impl Table {
    /// Steady-state table size the replenishment policy aims for.
    pub const TARGET_SIZE: usize = 12;

    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a dealt card at the end of the table.
    pub fn place(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove the first occurrence of `card`, preserving the order of the
    /// remaining cards. Returns whether the card was present.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(idx) => {
                self.cards.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Whether the given card is currently on the table.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Number of cards on the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards in dealing order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
