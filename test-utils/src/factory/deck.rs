//! Deck factory for creating test deck entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test decks with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::deck::DeckFactory;
///
/// let deck = DeckFactory::new(&db)
///     .name("Japanese Vocabulary")
///     .build()
///     .await?;
/// ```
pub struct DeckFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    name: String,
}

impl<'a> DeckFactory<'a> {
    /// Creates a new DeckFactory with default values.
    ///
    /// Defaults:
    /// - id: random v4 UUID
    /// - name: `"Deck {n}"` where n is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `DeckFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: Uuid::new_v4(),
            name: format!("Deck {}", next_id()),
        }
    }

    /// Sets the deck ID.
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets the deck name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the deck entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::deck::Model)` - Created deck entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::deck::Model, DbErr> {
        entity::deck::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a deck with default values.
///
/// Shorthand for `DeckFactory::new(db).build().await`.
pub async fn create_deck(db: &DatabaseConnection) -> Result<entity::deck::Model, DbErr> {
    DeckFactory::new(db).build().await
}
