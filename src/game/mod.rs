//! Game orchestration: turn scheduling, the game loop, winner resolution.

pub mod result;
pub mod scheduler;
pub mod session;

pub use result::{resolve_winner, WinnerResult};
pub use scheduler::schedule_round;
pub use session::{play_game, GameSession, RoundOutcome};
