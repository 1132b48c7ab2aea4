//! Deck data repository for database operations.
//!
//! This module provides the `DeckRepository` for managing deck records in the database.
//! Deck names carry a unique index; `create` and `update` translate violations of that
//! index into a `Conflict` outcome so the uniqueness decision is made atomically by
//! the database rather than by a separate check.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::{is_unique_violation, InsertOutcome, WriteOutcome},
    model::deck::{CreateDeckParams, Deck, UpdateDeckParams},
};

/// Repository providing database operations for deck management.
pub struct DeckRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeckRepository<'a> {
    /// Creates a new DeckRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `DeckRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a deck by ID.
    ///
    /// # Arguments
    /// - `id` - ID of the deck
    ///
    /// # Returns
    /// - `Ok(Some(Deck))` - Deck found
    /// - `Ok(None)` - No deck exists with the specified ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Deck>, DbErr> {
        let entity = entity::prelude::Deck::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Deck::from_entity))
    }

    /// Gets all decks ordered alphabetically by name.
    ///
    /// # Returns
    /// - `Ok(Vec<Deck>)` - All decks, empty if none exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Deck>, DbErr> {
        let entities = entity::prelude::Deck::find()
            .order_by_asc(entity::deck::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Deck::from_entity).collect())
    }

    /// Finds the deck that currently owns a name.
    ///
    /// A missing deck is the normal outcome when the name is still free and is reported
    /// as `None`, not as an error.
    ///
    /// # Arguments
    /// - `name` - Exact deck name to look up
    ///
    /// # Returns
    /// - `Ok(Some(Deck))` - The deck using this name
    /// - `Ok(None)` - No deck uses this name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Deck>, DbErr> {
        let entity = entity::prelude::Deck::find()
            .filter(entity::deck::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Deck::from_entity))
    }

    /// Creates a new deck with a freshly generated ID.
    ///
    /// # Arguments
    /// - `param` - Create parameters containing the deck name
    ///
    /// # Returns
    /// - `Ok(InsertOutcome::Inserted(Deck))` - The created deck
    /// - `Ok(InsertOutcome::Conflict)` - Another deck already uses the name; nothing was inserted
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, param: CreateDeckParams) -> Result<InsertOutcome<Deck>, DbErr> {
        let result = entity::deck::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(param.name),
        }
        .insert(self.db)
        .await;

        match result {
            Ok(entity) => Ok(InsertOutcome::Inserted(Deck::from_entity(entity))),
            Err(err) if is_unique_violation(&err) => Ok(InsertOutcome::Conflict),
            Err(err) => Err(err),
        }
    }

    /// Renames a deck.
    ///
    /// Issues a single UPDATE against the deck's ID and returns the row as stored
    /// afterwards.
    ///
    /// # Arguments
    /// - `param` - Update parameters containing the deck ID and new name
    ///
    /// # Returns
    /// - `Ok(WriteOutcome::Written(Deck))` - The updated deck
    /// - `Ok(WriteOutcome::Missing)` - No deck exists with the specified ID
    /// - `Ok(WriteOutcome::Conflict)` - Another deck already uses the new name
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn update(&self, param: UpdateDeckParams) -> Result<WriteOutcome<Deck>, DbErr> {
        let result = entity::deck::ActiveModel {
            id: ActiveValue::Unchanged(param.id),
            name: ActiveValue::Set(param.name),
        }
        .update(self.db)
        .await;

        match result {
            Ok(entity) => Ok(WriteOutcome::Written(Deck::from_entity(entity))),
            Err(DbErr::RecordNotUpdated) => Ok(WriteOutcome::Missing),
            Err(err) if is_unique_violation(&err) => Ok(WriteOutcome::Conflict),
            Err(err) => Err(err),
        }
    }

    /// Deletes a deck.
    ///
    /// # Arguments
    /// - `id` - ID of the deck to delete
    ///
    /// # Returns
    /// - `Ok(())` - Deck deleted successfully (or didn't exist)
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Deck::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
