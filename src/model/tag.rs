use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A label that can be attached to cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TagDto {
    pub id: Uuid,
    pub name: String,
}

/// Body of the tag creation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTagDto {
    pub name: String,
}

/// Body of the tag update endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateTagDto {
    pub name: String,
}
