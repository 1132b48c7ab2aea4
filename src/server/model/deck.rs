//! Domain models and parameter types for deck operations.

use uuid::Uuid;

use crate::model::deck::{CreateDeckDto, DeckDto, UpdateDeckDto};

/// A deck as seen by the service layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Server-generated identifier.
    pub id: Uuid,
    /// Name of the deck, unique across all decks.
    pub name: String,
}

impl Deck {
    /// Converts the deck to a DTO for API responses.
    pub fn into_dto(self) -> DeckDto {
        DeckDto {
            id: self.id,
            name: self.name,
        }
    }

    /// Converts an entity model to a deck domain model.
    ///
    /// This conversion happens at the data layer boundary to ensure entity models
    /// never leak into service or controller layers.
    pub fn from_entity(entity: entity::deck::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

/// Parameters for creating a new deck.
#[derive(Debug, Clone)]
pub struct CreateDeckParams {
    /// Name of the new deck.
    pub name: String,
}

impl CreateDeckParams {
    pub fn from_dto(dto: CreateDeckDto) -> Self {
        Self { name: dto.name }
    }
}

/// Parameters for renaming an existing deck.
#[derive(Debug, Clone)]
pub struct UpdateDeckParams {
    /// ID of the deck to update.
    pub id: Uuid,
    /// New name for the deck.
    pub name: String,
}

impl UpdateDeckParams {
    pub fn from_dto(id: Uuid, dto: UpdateDeckDto) -> Self {
        Self { id, name: dto.name }
    }
}
