use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{deck::DeckRepository, InsertOutcome, WriteOutcome},
    error::{
        entity::{EntityError, EntityKind},
        AppError,
    },
    model::deck::{CreateDeckParams, Deck, UpdateDeckParams},
};

pub struct DeckService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeckService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a deck by ID
    ///
    /// # Returns
    /// - `Ok(Deck)`: The deck
    /// - `Err(AppError::EntityErr(NotFound))`: No deck has this ID
    /// - `Err(AppError)`: Database error
    pub async fn get_by_id(&self, id: Uuid) -> Result<Deck, AppError> {
        let repo = DeckRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id).into())
    }

    /// Gets all decks, possibly none
    pub async fn get_all(&self) -> Result<Vec<Deck>, AppError> {
        let repo = DeckRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Creates a new deck
    ///
    /// Uniqueness is decided by the insert itself, so two concurrent creates for the
    /// same name resolve to one deck and one `NameConflict`.
    pub async fn create(&self, params: CreateDeckParams) -> Result<Deck, AppError> {
        let repo = DeckRepository::new(self.db);
        let name = params.name.clone();

        match repo.create(params).await? {
            InsertOutcome::Inserted(deck) => Ok(deck),
            InsertOutcome::Conflict => Err(name_conflict(name).into()),
        }
    }

    /// Renames a deck
    ///
    /// A name owned by a different deck is rejected before writing. Keeping the
    /// deck's own current name is allowed. The unique index still guards the write
    /// against a concurrent rename to the same name.
    ///
    /// # Returns
    /// - `Ok(Deck)`: The renamed deck
    /// - `Err(AppError::EntityErr(NameConflict))`: Another deck uses the name
    /// - `Err(AppError::EntityErr(NotFound))`: No deck has this ID
    /// - `Err(AppError)`: Database error
    pub async fn update(&self, params: UpdateDeckParams) -> Result<Deck, AppError> {
        let repo = DeckRepository::new(self.db);
        let (id, name) = (params.id, params.name.clone());

        if let Some(owner) = repo.find_by_name(&name).await? {
            if owner.id != id {
                return Err(name_conflict(name).into());
            }
        }

        match repo.update(params).await? {
            WriteOutcome::Written(deck) => Ok(deck),
            WriteOutcome::Missing => Err(not_found(id).into()),
            WriteOutcome::Conflict => Err(name_conflict(name).into()),
        }
    }

    /// Deletes a deck, succeeding whether or not it existed
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let repo = DeckRepository::new(self.db);

        repo.delete(id).await?;

        Ok(())
    }
}

fn not_found(id: Uuid) -> EntityError {
    EntityError::NotFound {
        kind: EntityKind::Deck,
        id,
    }
}

fn name_conflict(name: String) -> EntityError {
    EntityError::NameConflict {
        kind: EntityKind::Deck,
        name,
    }
}
