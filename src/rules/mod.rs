//! The matching law: validity, completion, and table search.
//!
//! ## Key Operations
//!
//! - [`is_valid_set`]: Three cards form a set when every attribute position
//!   is uniform or fully distinct across them
//! - [`complete_set`]: Any two distinct cards determine a unique third
//! - [`find_set`]: First set on the table in deterministic pair order

pub mod completion;
pub mod search;
pub mod validity;

pub use completion::complete_set;
pub use search::find_set;
pub use validity::is_valid_set;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A claimed 3-card group.
///
/// Every `SetTriple` the engine produces satisfies [`is_valid_set`]; the
/// type itself does not enforce it, the producing operations do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetTriple(pub [Card; 3]);

impl SetTriple {
    /// The three cards in discovery order.
    #[must_use]
    pub const fn cards(self) -> [Card; 3] {
        self.0
    }

    /// Whether the triple contains the given card.
    #[must_use]
    pub fn contains(self, card: Card) -> bool {
        self.0.contains(&card)
    }
}

impl std::fmt::Display for SetTriple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} {} {}]", self.0[0], self.0[1], self.0[2])
    }
}
