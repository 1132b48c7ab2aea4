//! Card data repository for database operations.
//!
//! Cards have no unique columns, so inserts never conflict. Updates write all three
//! content fields at once; merging a partial update with the stored values happens in
//! the service layer before `update` is called.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::card::{Card, CreateCardParams};

/// Repository providing database operations for card management.
pub struct CardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a card by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Card))` - Card found
    /// - `Ok(None)` - No card exists with the specified ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Card>, DbErr> {
        let entity = entity::prelude::Card::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Card::from_entity))
    }

    /// Gets all cards ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Card>, DbErr> {
        let entities = entity::prelude::Card::find()
            .order_by_asc(entity::card::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Card::from_entity).collect())
    }

    /// Creates a new card with a freshly generated ID.
    ///
    /// Fields missing from `param` are stored as NULL.
    ///
    /// # Arguments
    /// - `param` - Create parameters with the optional card fields
    ///
    /// # Returns
    /// - `Ok(Card)` - The created card
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, param: CreateCardParams) -> Result<Card, DbErr> {
        let entity = entity::card::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(param.name),
            front_content: ActiveValue::Set(param.front_content),
            back_content: ActiveValue::Set(param.back_content),
        }
        .insert(self.db)
        .await?;

        Ok(Card::from_entity(entity))
    }

    /// Overwrites every content field of a card.
    ///
    /// # Arguments
    /// - `card` - The full card to store, identified by its ID
    ///
    /// # Returns
    /// - `Ok(Some(Card))` - The card as stored after the update
    /// - `Ok(None)` - No card exists with the card's ID
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn update(&self, card: Card) -> Result<Option<Card>, DbErr> {
        let result = entity::card::ActiveModel {
            id: ActiveValue::Unchanged(card.id),
            name: ActiveValue::Set(card.name),
            front_content: ActiveValue::Set(card.front_content),
            back_content: ActiveValue::Set(card.back_content),
        }
        .update(self.db)
        .await;

        match result {
            Ok(entity) => Ok(Some(Card::from_entity(entity))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Deletes a card. Succeeds whether or not the card existed.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Card::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
