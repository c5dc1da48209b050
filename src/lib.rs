//! # set-engine
//!
//! A deterministic simulation engine for the Set pattern-matching card game:
//! 81 cards, each an ordered 4-tuple of 3-valued attributes, and a single
//! combinatorial law — three cards form a set when every attribute position
//! is either uniform or fully distinct across them.
//!
//! ## Design Principles
//!
//! 1. **Explicit ownership**: A [`GameSession`] exclusively owns the deck,
//!    the table, and the player roster for the lifetime of one game. There
//!    is no ambient global state.
//!
//! 2. **Injected randomness**: All random draws go through a seedable
//!    [`GameRng`] supplied at session creation. A game is exactly
//!    reproducible from `(player_count, seed)`.
//!
//! 3. **Errors over silence**: Contract violations (dealing from an empty
//!    deck, completing a set from two identical cards, zero players) are
//!    explicit [`EngineError`] values, never silent fallbacks.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, errors
//! - `cards`: Card model, deck generation, table state
//! - `rules`: Validity oracle, completion solver, table search
//! - `game`: Turn scheduling, the game loop, winner resolution
//! - `util`: Bounded top-k selection and nested counting helpers

pub mod core;
pub mod cards;
pub mod rules;
pub mod game;
pub mod util;

// Re-export commonly used types
pub use crate::core::{EngineError, GameRng, Player, PlayerId, Roster, SkillProfile};

pub use crate::cards::{Card, Deck, Table, ATTRIBUTES, DECK_SIZE, VALUES};

pub use crate::rules::{complete_set, find_set, is_valid_set, SetTriple};

pub use crate::game::{play_game, GameSession, RoundOutcome, WinnerResult};

pub use crate::util::{BoundedTopK, NestedCounter};
