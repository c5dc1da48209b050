//! The deck: the pool of undealt cards.
//!
//! A full deck holds every card of the Cartesian product `{0,1,2}^4`
//! exactly once, in a fixed enumeration order. Cards leave the deck by
//! uniform random draw and never return.

use serde::{Deserialize, Serialize};

use super::card::{Card, DECK_SIZE, VALUES};
use crate::core::{EngineError, GameRng};

/// The undealt card pool.
///
/// Created once per game via [`Deck::full`]; mutated only by
/// [`Deck::deal`], which strictly shrinks it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Generate the full 81-card deck.
    ///
    /// Enumeration is nested iteration over the four attribute positions,
    /// each running 0→1→2, leftmost position slowest.
    ///
    /// ```
    /// use set_engine::cards::{Card, Deck};
    ///
    /// let deck = Deck::full();
    /// assert_eq!(deck.len(), 81);
    /// assert!(deck.contains(Card::new([2, 1, 0, 2])));
    /// ```
    #[must_use]
    pub fn full() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for first in 0..VALUES {
            for second in 0..VALUES {
                for third in 0..VALUES {
                    for fourth in 0..VALUES {
                        cards.push(Card::new([first, second, third, fourth]));
                    }
                }
            }
        }

        debug_assert_eq!(cards.len(), DECK_SIZE);
        Self { cards }
    }

    /// Remove and return one uniformly random card.
    ///
    /// Selection is a uniform index draw over the deck's current size;
    /// removal preserves the relative order of the remaining cards.
    /// Fails with [`EngineError::EmptyDeck`] if no cards remain — callers
    /// check [`Deck::is_empty`] first.
    pub fn deal(&mut self, rng: &mut GameRng) -> Result<Card, EngineError> {
        if self.cards.is_empty() {
            return Err(EngineError::EmptyDeck);
        }

        let idx = rng.index(self.cards.len());
        Ok(self.cards.remove(idx))
    }

    /// Number of undealt cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether the given card is still undealt.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Iterate over the undealt cards in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
