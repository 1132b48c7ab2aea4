//! Card factory for creating test card entities.
//!
//! Cards have no required content, so the default factory inserts a card whose name,
//! front, and back are all unset. Use the builder methods to fill in individual fields.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test cards with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::card::CardFactory;
///
/// let card = CardFactory::new(&db)
///     .name("Greeting")
///     .front_content("こんにちは")
///     .back_content("Hello")
///     .build()
///     .await?;
/// ```
pub struct CardFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    name: Option<String>,
    front_content: Option<String>,
    back_content: Option<String>,
}

impl<'a> CardFactory<'a> {
    /// Creates a new CardFactory with a random ID and no content.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: Uuid::new_v4(),
            name: None,
            front_content: None,
            back_content: None,
        }
    }

    /// Sets the card ID.
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets the card name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the content shown on the front of the card.
    pub fn front_content(mut self, front_content: impl Into<String>) -> Self {
        self.front_content = Some(front_content.into());
        self
    }

    /// Sets the content shown on the back of the card.
    pub fn back_content(mut self, back_content: impl Into<String>) -> Self {
        self.back_content = Some(back_content.into());
        self
    }

    /// Builds and inserts the card entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::card::Model)` - Created card entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::card::Model, DbErr> {
        entity::card::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            front_content: ActiveValue::Set(self.front_content),
            back_content: ActiveValue::Set(self.back_content),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a card with every content field populated.
///
/// Most tests exercising partial updates want existing values to compare against, so
/// unlike `CardFactory::new` this fills in name, front, and back.
pub async fn create_card(db: &DatabaseConnection) -> Result<entity::card::Model, DbErr> {
    CardFactory::new(db)
        .name("Card")
        .front_content("Front")
        .back_content("Back")
        .build()
        .await
}
