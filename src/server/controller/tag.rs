use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        tag::{CreateTagDto, TagDto, UpdateTagDto},
    },
    server::{
        error::AppError,
        extract::{ApiJson, ApiPath},
        model::tag::{CreateTagParams, UpdateTagParams},
        service::tag::TagService,
        state::AppState,
    },
};

/// Tag for grouping tag endpoints in OpenAPI documentation
pub static TAG_TAG: &str = "tag";

/// Get a tag by ID.
///
/// # Returns
/// - `200 OK` - The tag
/// - `400 Bad Request` - No tag has this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tags/{tag_id}",
    tag = TAG_TAG,
    params(
        ("tag_id" = Uuid, Path, description = "Tag ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved tag", body = TagDto),
        (status = 400, description = "Tag does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tag_by_id(
    State(state): State<AppState>,
    ApiPath(tag_id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = TagService::new(&state.db);

    let tag = service.get_by_id(tag_id).await?;

    Ok((StatusCode::OK, Json(tag.into_dto())))
}

/// Get all tags ordered by name.
///
/// # Returns
/// - `200 OK` - List of tags, empty if none exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tags",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "Successfully retrieved tags", body = Vec<TagDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tags(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = TagService::new(&state.db);

    let tags: Vec<TagDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(|tag| tag.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(tags)))
}

/// Create a new tag.
///
/// # Returns
/// - `200 OK` - The created tag
/// - `400 Bad Request` - Another tag already uses the name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/tags",
    tag = TAG_TAG,
    request_body = CreateTagDto,
    responses(
        (status = 200, description = "Successfully created tag", body = TagDto),
        (status = 400, description = "Tag name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tag(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateTagDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TagService::new(&state.db);

    let tag = service.create(CreateTagParams::from_dto(payload)).await?;

    Ok((StatusCode::OK, Json(tag.into_dto())))
}

/// Rename a tag.
///
/// # Returns
/// - `200 OK` - The updated tag
/// - `400 Bad Request` - No tag has this ID, or another tag already uses the name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/tags/{tag_id}",
    tag = TAG_TAG,
    params(
        ("tag_id" = Uuid, Path, description = "Tag ID")
    ),
    request_body = UpdateTagDto,
    responses(
        (status = 200, description = "Successfully updated tag", body = TagDto),
        (status = 400, description = "Tag does not exist or name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_tag(
    State(state): State<AppState>,
    ApiPath(tag_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateTagDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TagService::new(&state.db);

    let tag = service
        .update(UpdateTagParams::from_dto(tag_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(tag.into_dto())))
}

/// Delete a tag.
///
/// Succeeds whether or not the tag existed.
///
/// # Returns
/// - `200 OK` - Tag deleted or already absent
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/tags/{tag_id}",
    tag = TAG_TAG,
    params(
        ("tag_id" = Uuid, Path, description = "Tag ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted tag"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_tag(
    State(state): State<AppState>,
    ApiPath(tag_id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = TagService::new(&state.db);

    service.delete(tag_id).await?;

    Ok(StatusCode::OK)
}
