//! Core engine types: errors, RNG, players.
//!
//! These are the building blocks the rest of the engine is assembled from.
//! Nothing here knows about the matching law or the game loop.

pub mod error;
pub mod player;
pub mod rng;

pub use error::EngineError;
pub use player::{Player, PlayerId, Roster, SkillProfile};
pub use rng::GameRng;
