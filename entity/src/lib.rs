//! SeaORM entity definitions for the flashcards schema.
//!
//! Each module mirrors one table created by the `migration` crate. The `prelude`
//! re-exports the entity types under their table names for concise queries.

pub mod prelude;

pub mod card;
pub mod deck;
pub mod tag;
