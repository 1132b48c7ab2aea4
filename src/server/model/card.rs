//! Domain models and parameter types for card operations.
//!
//! Cards have no required fields. Creation stores whichever fields were supplied and
//! leaves the rest unset; updates merge field by field so that anything the caller did
//! not mention keeps its stored value.

use uuid::Uuid;

use crate::model::card::{CardDto, CreateCardDto, UpdateCardDto};

/// A card as seen by the service layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Server-generated identifier.
    pub id: Uuid,
    /// Optional display name.
    pub name: Option<String>,
    /// Optional content of the front side.
    pub front_content: Option<String>,
    /// Optional content of the back side.
    pub back_content: Option<String>,
}

impl Card {
    /// Converts the card to a DTO for API responses.
    pub fn into_dto(self) -> CardDto {
        CardDto {
            id: self.id,
            name: self.name,
            front_content: self.front_content,
            back_content: self.back_content,
        }
    }

    /// Converts an entity model to a card domain model.
    pub fn from_entity(entity: entity::card::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            front_content: entity.front_content,
            back_content: entity.back_content,
        }
    }
}

/// Parameters for creating a new card.
#[derive(Debug, Clone, Default)]
pub struct CreateCardParams {
    pub name: Option<String>,
    pub front_content: Option<String>,
    pub back_content: Option<String>,
}

impl CreateCardParams {
    pub fn from_dto(dto: CreateCardDto) -> Self {
        Self {
            name: dto.name,
            front_content: dto.front_content,
            back_content: dto.back_content,
        }
    }
}

/// Parameters for a partial card update.
///
/// For each field, `None` means the caller did not mention it and `Some(value)` means
/// the caller supplied `value`, where `Some(None)` clears the field.
#[derive(Debug, Clone, Default)]
pub struct UpdateCardParams {
    /// ID of the card to update.
    pub id: Uuid,
    pub name: Option<Option<String>>,
    pub front_content: Option<Option<String>>,
    pub back_content: Option<Option<String>>,
}

impl UpdateCardParams {
    pub fn from_dto(id: Uuid, dto: UpdateCardDto) -> Self {
        Self {
            id,
            name: dto.name,
            front_content: dto.front_content,
            back_content: dto.back_content,
        }
    }

    /// Applies the supplied fields on top of the stored card.
    ///
    /// # Arguments
    /// - `existing` - The card as currently stored
    ///
    /// # Returns
    /// - `Card` - The card to persist, keeping `existing`'s ID and every field that
    ///   was not supplied
    pub fn merge(self, existing: Card) -> Card {
        Card {
            id: existing.id,
            name: self.name.unwrap_or(existing.name),
            front_content: self.front_content.unwrap_or(existing.front_content),
            back_content: self.back_content.unwrap_or(existing.back_content),
        }
    }
}
