use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::card::CardRepository,
    error::{
        entity::{EntityError, EntityKind},
        AppError,
    },
    model::card::{Card, CreateCardParams, UpdateCardParams},
};

pub struct CardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a card by ID
    ///
    /// # Returns
    /// - `Ok(Card)`: The card
    /// - `Err(AppError::EntityErr(NotFound))`: No card has this ID
    /// - `Err(AppError)`: Database error
    pub async fn get_by_id(&self, id: Uuid) -> Result<Card, AppError> {
        let repo = CardRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id).into())
    }

    /// Gets all cards, possibly none
    pub async fn get_all(&self) -> Result<Vec<Card>, AppError> {
        let repo = CardRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Creates a new card from whichever fields were supplied
    ///
    /// Cards carry no unique columns so creation cannot conflict.
    pub async fn create(&self, params: CreateCardParams) -> Result<Card, AppError> {
        let repo = CardRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Applies a partial update to a card
    ///
    /// Loads the stored card, replaces only the fields present in `params`, and writes
    /// the merged card back. Fields the caller did not mention keep their stored value.
    ///
    /// # Returns
    /// - `Ok(Card)`: The card as stored after the update
    /// - `Err(AppError::EntityErr(NotFound))`: No card has this ID, including when the
    ///   card is deleted between the read and the write
    /// - `Err(AppError)`: Database error
    pub async fn update(&self, params: UpdateCardParams) -> Result<Card, AppError> {
        let repo = CardRepository::new(self.db);
        let id = params.id;

        let existing = repo.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

        repo.update(params.merge(existing))
            .await?
            .ok_or_else(|| not_found(id).into())
    }

    /// Deletes a card, succeeding whether or not it existed
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let repo = CardRepository::new(self.db);

        repo.delete(id).await?;

        Ok(())
    }
}

fn not_found(id: Uuid) -> EntityError {
    EntityError::NotFound {
        kind: EntityKind::Card,
        id,
    }
}
