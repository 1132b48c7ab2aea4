use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        deck::{CreateDeckDto, DeckDto, UpdateDeckDto},
    },
    server::{
        error::AppError,
        extract::{ApiJson, ApiPath},
        model::deck::{CreateDeckParams, UpdateDeckParams},
        service::deck::DeckService,
        state::AppState,
    },
};

/// Tag for grouping deck endpoints in OpenAPI documentation
pub static DECK_TAG: &str = "deck";

/// Get a deck by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `deck_id` - ID of the deck to fetch
///
/// # Returns
/// - `200 OK` - The deck
/// - `400 Bad Request` - No deck has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/decks/{deck_id}",
    tag = DECK_TAG,
    params(
        ("deck_id" = Uuid, Path, description = "Deck ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved deck", body = DeckDto),
        (status = 400, description = "Deck does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_deck_by_id(
    State(state): State<AppState>,
    ApiPath(deck_id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = DeckService::new(&state.db);

    let deck = service.get_by_id(deck_id).await?;

    Ok((StatusCode::OK, Json(deck.into_dto())))
}

/// Get all decks ordered by name.
///
/// # Returns
/// - `200 OK` - List of decks, empty if none exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/decks",
    tag = DECK_TAG,
    responses(
        (status = 200, description = "Successfully retrieved decks", body = Vec<DeckDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_decks(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = DeckService::new(&state.db);

    let decks: Vec<DeckDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|deck| deck.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(decks)))
}

/// Create a new deck.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Deck name
///
/// # Returns
/// - `200 OK` - The created deck
/// - `400 Bad Request` - Another deck already uses the name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/decks",
    tag = DECK_TAG,
    request_body = CreateDeckDto,
    responses(
        (status = 200, description = "Successfully created deck", body = DeckDto),
        (status = 400, description = "Deck name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_deck(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateDeckDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DeckService::new(&state.db);

    let deck = service.create(CreateDeckParams::from_dto(payload)).await?;

    Ok((StatusCode::OK, Json(deck.into_dto())))
}

/// Rename a deck.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `deck_id` - ID of the deck to rename
/// - `payload` - New deck name
///
/// # Returns
/// - `200 OK` - The updated deck
/// - `400 Bad Request` - No deck has this ID, or another deck already uses the name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/decks/{deck_id}",
    tag = DECK_TAG,
    params(
        ("deck_id" = Uuid, Path, description = "Deck ID")
    ),
    request_body = UpdateDeckDto,
    responses(
        (status = 200, description = "Successfully updated deck", body = DeckDto),
        (status = 400, description = "Deck does not exist or name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_deck(
    State(state): State<AppState>,
    ApiPath(deck_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateDeckDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = DeckService::new(&state.db);

    let deck = service
        .update(UpdateDeckParams::from_dto(deck_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(deck.into_dto())))
}

/// Delete a deck.
///
/// Succeeds whether or not the deck existed.
///
/// # Returns
/// - `200 OK` - Deck deleted or already absent
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/decks/{deck_id}",
    tag = DECK_TAG,
    params(
        ("deck_id" = Uuid, Path, description = "Deck ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted deck"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_deck(
    State(state): State<AppState>,
    ApiPath(deck_id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = DeckService::new(&state.db);

    service.delete(deck_id).await?;

    Ok(StatusCode::OK)
}
