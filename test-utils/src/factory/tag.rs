//! Tag factory for creating test tag entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test tags with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::tag::TagFactory;
///
/// let tag = TagFactory::new(&db)
///     .name("Grammar")
///     .build()
///     .await?;
/// ```
pub struct TagFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    name: String,
}

impl<'a> TagFactory<'a> {
    /// Creates a new TagFactory with default values.
    ///
    /// Defaults:
    /// - id: random v4 UUID
    /// - name: `"Tag {n}"` where n is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `TagFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: Uuid::new_v4(),
            name: format!("Tag {}", next_id()),
        }
    }

    /// Sets the tag ID.
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets the tag name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the tag entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::tag::Model)` - Created tag entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::tag::Model, DbErr> {
        entity::tag::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tag with default values.
///
/// Shorthand for `TagFactory::new(db).build().await`.
pub async fn create_tag(db: &DatabaseConnection) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db).build().await
}
