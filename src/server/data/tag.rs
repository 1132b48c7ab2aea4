//! Tag data repository for database operations.
//!
//! Mirrors `DeckRepository`: tag names carry a unique index and collisions surface as
//! a `Conflict` outcome.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::{is_unique_violation, InsertOutcome, WriteOutcome},
    model::tag::{CreateTagParams, Tag, UpdateTagParams},
};

/// Repository providing database operations for tag management.
pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a tag by ID.
    ///
    /// # Arguments
    /// - `id` - ID of the tag
    ///
    /// # Returns
    /// - `Ok(Some(Tag))` - Tag found
    /// - `Ok(None)` - No tag exists with the specified ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Tag>, DbErr> {
        let entity = entity::prelude::Tag::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Tag::from_entity))
    }

    /// Gets all tags ordered alphabetically by name.
    ///
    /// # Returns
    /// - `Ok(Vec<Tag>)` - All tags, empty if none exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Tag>, DbErr> {
        let entities = entity::prelude::Tag::find()
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Tag::from_entity).collect())
    }

    /// Finds the tag that currently owns a name.
    ///
    /// A missing tag is the normal outcome when the name is still free and is reported
    /// as `None`, not as an error.
    ///
    /// # Arguments
    /// - `name` - Exact tag name to look up
    ///
    /// # Returns
    /// - `Ok(Some(Tag))` - The tag using this name
    /// - `Ok(None)` - No tag uses this name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, DbErr> {
        let entity = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Tag::from_entity))
    }

    /// Creates a new tag with a freshly generated ID.
    ///
    /// # Arguments
    /// - `param` - Create parameters containing the tag name
    ///
    /// # Returns
    /// - `Ok(InsertOutcome::Inserted(Tag))` - The created tag
    /// - `Ok(InsertOutcome::Conflict)` - Another tag already uses the name; nothing was inserted
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, param: CreateTagParams) -> Result<InsertOutcome<Tag>, DbErr> {
        let result = entity::tag::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(param.name),
        }
        .insert(self.db)
        .await;

        match result {
            Ok(entity) => Ok(InsertOutcome::Inserted(Tag::from_entity(entity))),
            Err(err) if is_unique_violation(&err) => Ok(InsertOutcome::Conflict),
            Err(err) => Err(err),
        }
    }

    /// Renames a tag.
    ///
    /// # Arguments
    /// - `param` - Update parameters containing the tag ID and new name
    ///
    /// # Returns
    /// - `Ok(WriteOutcome::Written(Tag))` - The updated tag
    /// - `Ok(WriteOutcome::Missing)` - No tag exists with the specified ID
    /// - `Ok(WriteOutcome::Conflict)` - Another tag already uses the new name
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn update(&self, param: UpdateTagParams) -> Result<WriteOutcome<Tag>, DbErr> {
        let result = entity::tag::ActiveModel {
            id: ActiveValue::Unchanged(param.id),
            name: ActiveValue::Set(param.name),
        }
        .update(self.db)
        .await;

        match result {
            Ok(entity) => Ok(WriteOutcome::Written(Tag::from_entity(entity))),
            Err(DbErr::RecordNotUpdated) => Ok(WriteOutcome::Missing),
            Err(err) if is_unique_violation(&err) => Ok(WriteOutcome::Conflict),
            Err(err) => Err(err),
        }
    }

    /// Deletes a tag.
    ///
    /// # Arguments
    /// - `id` - ID of the tag to delete
    ///
    /// # Returns
    /// - `Ok(())` - Tag deleted successfully (or didn't exist)
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Tag::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
