//! The stochastic turn scheduler.
//!
//! Each round, every player's performance is sampled from a normal
//! distribution parameterized by their fixed skill profile, and the
//! highest sample takes the round's credit. The sample models per-round
//! alertness: it is drawn whether or not a set turns out to exist, and the
//! credited player is not the result of any modeled search contest.

use crate::core::{GameRng, PlayerId, Roster};

/// Determine the round's credited player.
///
/// One normal draw per player, in roster order. The strictly highest
/// sample wins; on a tie the first-scanned player is retained (running-max
/// scan with strict `>`).
#[must_use]
pub fn schedule_round(roster: &Roster, rng: &mut GameRng) -> PlayerId {
    let mut credited = PlayerId::new(0);
    let mut best = f64::NEG_INFINITY;

    for player in roster.iter() {
        let roll = rng.normal(player.skill.mean, player.skill.std_dev);
        if roll > best {
            best = roll;
            credited = player.id;
        }
    }

    credited
}
