use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A deck of flashcards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeckDto {
    pub id: Uuid,
    pub name: String,
}

/// Body of the deck creation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDeckDto {
    pub name: String,
}

/// Body of the deck update endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateDeckDto {
    pub name: String,
}
