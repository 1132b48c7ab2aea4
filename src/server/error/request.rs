use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A request that could not be turned into handler arguments.
///
/// Raised by the `ApiJson` and `ApiPath` extractors before any handler runs.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The body is not JSON or does not match the expected payload.
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    /// A path segment could not be parsed, such as an ID that is not a UUID.
    #[error(transparent)]
    InvalidPath(#[from] PathRejection),
}

/// Converts rejected requests into 400 Bad Request with the rejection text as body.
impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected malformed request: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
