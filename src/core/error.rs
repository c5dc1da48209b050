//! Engine error type.
//!
//! The engine distinguishes contract violations (dealing from an empty
//! deck, completing two identical cards) from invalid configuration.
//! Neither is expected during normal play: the replenishment policy never
//! draws from an empty deck, and the table search never pairs a card with
//! itself. They are still explicit errors rather than panics so callers
//! and tests can observe them.

use thiserror::Error;

use crate::cards::Card;

/// Errors produced by the simulation engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A draw was attempted against an empty deck.
    #[error("cannot deal from an empty deck")]
    EmptyDeck,

    /// The completion solver was given two identical cards.
    ///
    /// Two equal cards cannot be completed into a set of three distinct
    /// cards, so the unique-third-card computation is undefined.
    #[error("cannot complete a set from two identical cards: {0}")]
    InvalidPair(Card),

    /// The requested game configuration is invalid.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}
