//! Card system: the combinatorial card model, the deck, and the table.
//!
//! ## Key Types
//!
//! - `Card`: A 4-attribute, 3-valued token; 81 distinct cards exist
//! - `Deck`: The undealt pool, dealt from by uniform random draw
//! - `Table`: The ordered pool of dealt, unclaimed cards

pub mod card;
pub mod deck;
pub mod table;

pub use card::{Card, ATTRIBUTES, DECK_SIZE, VALUES};
pub use deck::Deck;
pub use table::Table;
