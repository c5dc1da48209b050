//! Winner resolution.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Roster};

/// Final outcome of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerResult {
    /// The winning player.
    pub winner: PlayerId,
    /// The winner's claimed-set count.
    pub winning_sets: usize,
    /// Claimed-set count for every player, in ID order.
    pub standings: Vec<(PlayerId, usize)>,
}

impl WinnerResult {
    /// The claimed-set count for the given player.
    #[must_use]
    pub fn sets_for(&self, id: PlayerId) -> usize {
        self.standings[id.index()].1
    }
}

impl std::fmt::Display for WinnerResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} was the winner, with {} sets.",
            self.winner, self.winning_sets
        )?;
        for (id, count) in &self.standings {
            write!(f, " {} had {} sets.", id, count)?;
        }
        Ok(())
    }
}

/// Reduce final player tallies to a result.
///
/// Scans players in ID order; the strictly greatest claimed-set count
/// wins, and the first-scanned player retains ties. With every count
/// equal (including an all-zero game) player 0 wins.
#[must_use]
pub fn resolve_winner(roster: &Roster) -> WinnerResult {
    let mut winner = PlayerId::new(0);
    let mut winning_sets = roster.get(winner).set_count();
    let mut standings = Vec::with_capacity(roster.player_count());

    for player in roster.iter() {
        if player.set_count() > winning_sets {
            winning_sets = player.set_count();
            winner = player.id;
        }
        standings.push((player.id, player.set_count()));
    }

    WinnerResult {
        winner,
        winning_sets,
        standings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::GameRng;
    use crate::rules::SetTriple;

    fn triple() -> SetTriple {
        SetTriple([
            Card::new([0, 0, 0, 0]),
            Card::new([1, 1, 1, 1]),
            Card::new([2, 2, 2, 2]),
        ])
    }

    #[test]
    fn test_highest_count_wins() {
        let mut rng = GameRng::new(42);
        let mut roster = Roster::generate(3, &mut rng).unwrap();

        roster.get_mut(PlayerId::new(1)).claim(triple());
        roster.get_mut(PlayerId::new(1)).claim(triple());
        roster.get_mut(PlayerId::new(2)).claim(triple());

        let result = resolve_winner(&roster);
        assert_eq!(result.winner, PlayerId::new(1));
        assert_eq!(result.winning_sets, 2);
        assert_eq!(result.sets_for(PlayerId::new(0)), 0);
        assert_eq!(result.sets_for(PlayerId::new(2)), 1);
    }

    #[test]
    fn test_first_scanned_wins_ties() {
        let mut rng = GameRng::new(42);
        let mut roster = Roster::generate(3, &mut rng).unwrap();

        roster.get_mut(PlayerId::new(1)).claim(triple());
        roster.get_mut(PlayerId::new(2)).claim(triple());

        let result = resolve_winner(&roster);
        assert_eq!(result.winner, PlayerId::new(1));
    }

    #[test]
    fn test_all_zero_game_goes_to_first_player() {
        let mut rng = GameRng::new(42);
        let roster = Roster::generate(2, &mut rng).unwrap();

        let result = resolve_winner(&roster);
        assert_eq!(result.winner, PlayerId::new(0));
        assert_eq!(result.winning_sets, 0);
    }

    #[test]
    fn test_winner_count_bounds_standings() {
        let mut rng = GameRng::new(42);
        let mut roster = Roster::generate(4, &mut rng).unwrap();

        roster.get_mut(PlayerId::new(3)).claim(triple());

        let result = resolve_winner(&roster);
        for &(_, count) in &result.standings {
            assert!(result.winning_sets >= count);
        }
    }

    #[test]
    fn test_display_breakdown() {
        let mut rng = GameRng::new(42);
        let mut roster = Roster::generate(2, &mut rng).unwrap();
        roster.get_mut(PlayerId::new(0)).claim(triple());

        let result = resolve_winner(&roster);
        let text = result.to_string();
        assert!(text.starts_with("Player 0 was the winner, with 1 sets."));
        assert!(text.contains("Player 1 had 0 sets."));
    }
}
