//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let deck = factory::deck::create_deck(&db).await?;
//!     let card = factory::card::CardFactory::new(&db)
//!         .front_content("Front")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `deck` - Create deck entities
//! - `card` - Create card entities
//! - `tag` - Create tag entities
//! - `helpers` - Shared utilities such as unique name generation

pub mod card;
pub mod deck;
pub mod helpers;
pub mod tag;

pub use card::create_card;
pub use deck::create_deck;
pub use tag::create_tag;
