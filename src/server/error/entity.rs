use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

/// The kind of entity an `EntityError` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Deck,
    Card,
    Tag,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Deck => "Deck",
            Self::Card => "Card",
            Self::Tag => "Tag",
        };
        f.write_str(name)
    }
}

/// Expected business outcomes of entity operations.
///
/// These are not faults: they describe requests that cannot be fulfilled given the
/// current contents of the store, and are always reported back to the client.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EntityError {
    /// No entity of this kind exists with the requested ID.
    ///
    /// Results in a 400 Bad Request response.
    #[error("{kind} with id {id} does not exist.")]
    NotFound {
        /// Kind of entity that was looked up
        kind: EntityKind,
        /// ID that was not found
        id: Uuid,
    },

    /// The requested name is already used by a different entity of this kind.
    ///
    /// Only decks and tags carry unique names. Results in a 400 Bad Request response.
    #[error("{kind} with name '{name}' already exists, the name must be unique.")]
    NameConflict {
        /// Kind of entity whose name collided
        kind: EntityKind,
        /// The name that is already taken
        name: String,
    },
}

/// Converts entity errors into HTTP responses.
///
/// Both variants map to 400 Bad Request with the error message as body, matching the
/// contract that a missing ID and a taken name are client-side problems.
impl IntoResponse for EntityError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected entity request: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
