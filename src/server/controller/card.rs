use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        card::{CardDto, CreateCardDto, UpdateCardDto},
    },
    server::{
        error::AppError,
        extract::{ApiJson, ApiPath},
        model::card::{CreateCardParams, UpdateCardParams},
        service::card::CardService,
        state::AppState,
    },
};

/// Tag for grouping card endpoints in OpenAPI documentation
pub static CARD_TAG: &str = "card";

/// Get a card by ID.
///
/// # Returns
/// - `200 OK` - The card
/// - `400 Bad Request` - No card has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cards/{card_id}",
    tag = CARD_TAG,
    params(
        ("card_id" = Uuid, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved card", body = CardDto),
        (status = 400, description = "Card does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_card_by_id(
    State(state): State<AppState>,
    ApiPath(card_id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = CardService::new(&state.db);

    let card = service.get_by_id(card_id).await?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

/// Get all cards.
#[utoipa::path(
    get,
    path = "/api/cards",
    tag = CARD_TAG,
    responses(
        (status = 200, description = "Successfully retrieved cards", body = Vec<CardDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cards(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CardService::new(&state.db);

    let cards: Vec<CardDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|card| card.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(cards)))
}

/// Create a new card.
///
/// Every field of the payload is optional; omitted fields are stored empty.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Any subset of name, front content and back content
///
/// # Returns
/// - `200 OK` - The created card
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/cards",
    tag = CARD_TAG,
    request_body = CreateCardDto,
    responses(
        (status = 200, description = "Successfully created card", body = CardDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_card(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateCardDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CardService::new(&state.db);

    let card = service.create(CreateCardParams::from_dto(payload)).await?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

/// Partially update a card.
///
/// Fields omitted from the payload keep their stored value. A field sent as `null`
/// is cleared.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `card_id` - ID of the card to update
/// - `payload` - Fields to replace
///
/// # Returns
/// - `200 OK` - The card after the update
/// - `400 Bad Request` - No card has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/cards/{card_id}",
    tag = CARD_TAG,
    params(
        ("card_id" = Uuid, Path, description = "Card ID")
    ),
    request_body = UpdateCardDto,
    responses(
        (status = 200, description = "Successfully updated card", body = CardDto),
        (status = 400, description = "Card does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_card(
    State(state): State<AppState>,
    ApiPath(card_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateCardDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CardService::new(&state.db);

    let card = service
        .update(UpdateCardParams::from_dto(card_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

/// Delete a card. Succeeds whether or not the card existed.
#[utoipa::path(
    delete,
    path = "/api/cards/{card_id}",
    tag = CARD_TAG,
    params(
        ("card_id" = Uuid, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted card"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_card(
    State(state): State<AppState>,
    ApiPath(card_id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = CardService::new(&state.db);

    service.delete(card_id).await?;

    Ok(StatusCode::OK)
}
