//! Player identification, skill profiles, and the roster.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players.
//!
//! ## SkillProfile
//!
//! Each player carries a (mean, std_dev) pair drawn once at game start
//! from uniform `[0, 1)`. The turn scheduler samples a normal performance
//! score from this profile every round; the parameters never change.
//!
//! ## Roster
//!
//! Per-player storage created once per session, backed by `Vec` for O(1)
//! access by `PlayerId`.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::rng::GameRng;
use crate::rules::SetTriple;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Fixed per-player performance parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillProfile {
    /// Mean of the per-round performance distribution.
    pub mean: f64,
    /// Standard deviation of the per-round performance distribution.
    pub std_dev: f64,
}

impl SkillProfile {
    /// Draw a fresh profile: mean first, then std_dev, each uniform on
    /// `[0, 1)`.
    #[must_use]
    pub fn draw(rng: &mut GameRng) -> Self {
        let mean = rng.unit();
        let std_dev = rng.unit();
        Self { mean, std_dev }
    }
}

/// One player: identity, skill, and claimed sets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// This player's identifier.
    pub id: PlayerId,
    /// Performance parameters, fixed for the game.
    pub skill: SkillProfile,
    claimed: Vec<SetTriple>,
}

impl Player {
    /// Create a player with the given skill and no claimed sets.
    #[must_use]
    pub fn new(id: PlayerId, skill: SkillProfile) -> Self {
        Self {
            id,
            skill,
            claimed: Vec::new(),
        }
    }

    /// Record a claimed set. The claimed list only grows.
    pub fn claim(&mut self, set: SetTriple) {
        self.claimed.push(set);
    }

    /// Number of sets this player has claimed.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.claimed.len()
    }

    /// The claimed sets in claim order.
    #[must_use]
    pub fn claimed(&self) -> &[SetTriple] {
        &self.claimed
    }
}

/// All players of one game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Generate `player_count` players, drawing each skill profile from
    /// the injected RNG (two uniform draws per player, in player order).
    ///
    /// Fails with [`EngineError::Configuration`] for zero players or more
    /// than 255.
    pub fn generate(player_count: usize, rng: &mut GameRng) -> Result<Self, EngineError> {
        if player_count < 1 {
            return Err(EngineError::Configuration(
                "need at least 1 player".into(),
            ));
        }
        if player_count > 255 {
            return Err(EngineError::Configuration(
                "at most 255 players supported".into(),
            ));
        }

        let players = PlayerId::all(player_count)
            .map(|id| Player::new(id, SkillProfile::draw(rng)))
            .collect();

        Ok(Self { players })
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Get a player by ID.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Get a player mutably by ID.
    pub fn get_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Iterate over the players in ID order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Total sets claimed across all players.
    #[must_use]
    pub fn total_claimed(&self) -> usize {
        self.players.iter().map(Player::set_count).sum()
    }
}
