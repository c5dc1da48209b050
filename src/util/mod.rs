//! Reusable selection and accumulation helpers.
//!
//! These back the summary-statistics collaborators around the engine:
//! bounded top-k selection and two-level counting with explicit
//! insert-or-increment semantics.

pub mod counter;
pub mod topk;

pub use counter::NestedCounter;
pub use topk::BoundedTopK;
