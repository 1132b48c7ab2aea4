//! Domain models and parameter types for tag operations.

use uuid::Uuid;

use crate::model::tag::{CreateTagDto, TagDto, UpdateTagDto};

/// A tag as seen by the service layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Server-generated identifier.
    pub id: Uuid,
    /// Name of the tag, unique across all tags.
    pub name: String,
}

impl Tag {
    /// Converts the tag to a DTO for API responses.
    pub fn into_dto(self) -> TagDto {
        TagDto {
            id: self.id,
            name: self.name,
        }
    }

    /// Converts an entity model to a tag domain model.
    ///
    /// This conversion happens at the data layer boundary to ensure entity models
    /// never leak into service or controller layers.
    pub fn from_entity(entity: entity::tag::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

/// Parameters for creating a new tag.
#[derive(Debug, Clone)]
pub struct CreateTagParams {
    /// Name of the new tag.
    pub name: String,
}

impl CreateTagParams {
    pub fn from_dto(dto: CreateTagDto) -> Self {
        Self { name: dto.name }
    }
}

/// Parameters for renaming an existing tag.
#[derive(Debug, Clone)]
pub struct UpdateTagParams {
    /// ID of the tag to update.
    pub id: Uuid,
    /// New name for the tag.
    pub name: String,
}

impl UpdateTagParams {
    pub fn from_dto(id: Uuid, dto: UpdateTagDto) -> Self {
        Self { id, name: dto.name }
    }
}
