//! The game session: state machine and replenishment policy.
//!
//! A session exclusively owns the deck, the table, the roster, and the
//! RNG for one game. The loop per round:
//!
//! 1. Replenish the table toward 12 while the deck has cards.
//! 2. Sample the round's credited player.
//! 3. Search the table for a set.
//! 4. On a find: credit it and remove its cards. On no find: top up 3
//!    cards if the table is full and the deck is not empty, otherwise the
//!    game is over.
//!
//! The deck strictly shrinks and the table is finite, so every game
//! terminates in bounded rounds.

use log::debug;

use super::result::{resolve_winner, WinnerResult};
use super::scheduler::schedule_round;
use crate::cards::{Deck, Table, DECK_SIZE};
use crate::core::{EngineError, GameRng, PlayerId, Roster};
use crate::rules::{find_set, SetTriple};

/// What one round of play did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// A set was found and credited to the given player.
    Claimed(PlayerId),
    /// No set on a full table; 3 extra cards were dealt, nobody credited.
    ToppedUp,
    /// The game is over.
    Finished,
}

/// One game of Set: deck, table, roster, and injected randomness.
#[derive(Clone, Debug)]
pub struct GameSession {
    deck: Deck,
    table: Table,
    roster: Roster,
    rng: GameRng,
    round: u32,
    finished: bool,
}

impl GameSession {
    /// Create a session: validate the configuration, draw every player's
    /// skill profile, build the full deck, and deal 12 cards.
    ///
    /// Fails with [`EngineError::Configuration`] for `player_count < 1`
    /// before any simulation state is created.
    pub fn new(player_count: usize, seed: u64) -> Result<Self, EngineError> {
        let mut rng = GameRng::new(seed);
        let roster = Roster::generate(player_count, &mut rng)?;

        let mut deck = Deck::full();
        let mut table = Table::new();
        for _ in 0..Table::TARGET_SIZE {
            table.place(deck.deal(&mut rng)?);
        }

        debug!(
            "session start: {} players, seed {}, {} cards dealt",
            player_count,
            seed,
            table.len()
        );

        Ok(Self {
            deck,
            table,
            roster,
            rng,
            round: 0,
            finished: false,
        })
    }

    /// Play one round of the loop. Idempotent once finished.
    pub fn play_round(&mut self) -> Result<RoundOutcome, EngineError> {
        if self.finished {
            return Ok(RoundOutcome::Finished);
        }

        // Deck exhausted and every card claimed.
        if self.table.is_empty() {
            debug!("round {}: table empty, game over", self.round);
            self.finished = true;
            return Ok(RoundOutcome::Finished);
        }

        self.round += 1;
        self.replenish()?;

        // Credit is sampled before the search and independently of its
        // outcome; see `schedule_round`.
        let credited = schedule_round(&self.roster, &mut self.rng);

        let outcome = match find_set(&self.table) {
            Some(set) => {
                self.claim(credited, set);
                debug!("round {}: {} claims {}", self.round, credited, set);
                RoundOutcome::Claimed(credited)
            }
            None if self.table.len() < Table::TARGET_SIZE => {
                // The deck ran dry before refilling the table.
                debug!("round {}: no set on short table, game over", self.round);
                self.finished = true;
                RoundOutcome::Finished
            }
            None if !self.deck.is_empty() => {
                for _ in 0..3 {
                    let card = self.deck.deal(&mut self.rng)?;
                    self.table.place(card);
                }
                debug!(
                    "round {}: no set, topped up to {} cards",
                    self.round,
                    self.table.len()
                );
                RoundOutcome::ToppedUp
            }
            None => {
                debug!("round {}: no set and no deck, game over", self.round);
                self.finished = true;
                RoundOutcome::Finished
            }
        };

        debug_assert_eq!(self.card_count(), DECK_SIZE);
        Ok(outcome)
    }

    /// Drive the session to completion and resolve the winner.
    pub fn run(&mut self) -> Result<WinnerResult, EngineError> {
        while !self.finished {
            self.play_round()?;
        }
        Ok(resolve_winner(&self.roster))
    }

    fn replenish(&mut self) -> Result<(), EngineError> {
        while self.table.len() < Table::TARGET_SIZE && !self.deck.is_empty() {
            let card = self.deck.deal(&mut self.rng)?;
            self.table.place(card);
        }
        Ok(())
    }

    fn claim(&mut self, credited: PlayerId, set: SetTriple) {
        for card in set.cards() {
            let removed = self.table.remove(card);
            debug_assert!(removed, "claimed card was not on the table");
        }
        self.roster.get_mut(credited).claim(set);
    }

    /// Whether the game has terminated.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Rounds played so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The undealt deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The current table.
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The player roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Cards accounted for across deck, table, and claims.
    ///
    /// Always equals [`DECK_SIZE`]: the three locations partition the
    /// original deck.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.table.len() + 3 * self.roster.total_claimed()
    }
}

/// Play one full game and return the result.
///
/// The engine's programmatic entry point: `player_count` players, all
/// randomness derived from `seed`.
///
/// ```
/// use set_engine::game::play_game;
///
/// let first = play_game(2, 42).unwrap();
/// let second = play_game(2, 42).unwrap();
/// assert_eq!(first, second);
/// ```
pub fn play_game(player_count: usize, seed: u64) -> Result<WinnerResult, EngineError> {
    let mut session = GameSession::new(player_count, seed)?;
    session.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_deals_twelve() {
        let session = GameSession::new(2, 42).unwrap();

        assert_eq!(session.table().len(), 12);
        assert_eq!(session.deck().len(), 69);
        assert_eq!(session.roster().player_count(), 2);
        assert!(!session.is_finished());
    }

    #[test]
    fn test_zero_players_fails_fast() {
        assert!(matches!(
            GameSession::new(0, 42),
            Err(EngineError::Configuration(_))
        ));
    }

    #[test]
    fn test_conservation_every_round() {
        let mut session = GameSession::new(3, 42).unwrap();

        while !session.is_finished() {
            assert_eq!(session.card_count(), DECK_SIZE);
            session.play_round().unwrap();
        }
        assert_eq!(session.card_count(), DECK_SIZE);
    }

    #[test]
    fn test_claimed_round_credits_a_player() {
        let mut session = GameSession::new(2, 42).unwrap();

        loop {
            match session.play_round().unwrap() {
                RoundOutcome::Claimed(player) => {
                    assert!(player.index() < 2);
                    assert!(session.roster().total_claimed() >= 1);
                    break;
                }
                RoundOutcome::ToppedUp => continue,
                RoundOutcome::Finished => panic!("game ended without any claim"),
            }
        }
    }

    #[test]
    fn test_topped_up_table_exceeds_target() {
        let mut session = GameSession::new(2, 42).unwrap();

        while !session.is_finished() {
            if session.play_round().unwrap() == RoundOutcome::ToppedUp {
                assert!(session.table().len() > Table::TARGET_SIZE);
                return;
            }
        }
        // Some seeds never need a top-up; that is a valid game too.
    }

    #[test]
    fn test_run_is_idempotent_after_finish() {
        let mut session = GameSession::new(2, 42).unwrap();
        let first = session.run().unwrap();
        let second = session.run().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_play_game_reproducible() {
        let a = play_game(2, 1234).unwrap();
        let b = play_game(2, 1234).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_play_game_different_seeds_can_differ() {
        // Not guaranteed for any two seeds, but these do differ.
        let results: Vec<_> = (0..16).map(|s| play_game(3, s).unwrap()).collect();
        assert!(results.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_single_player_takes_everything() {
        let result = play_game(1, 42).unwrap();
        assert_eq!(result.winner, PlayerId::new(0));
        assert_eq!(result.standings.len(), 1);
        assert_eq!(result.winning_sets, result.sets_for(PlayerId::new(0)));
    }
}
