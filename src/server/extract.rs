//! Request extractors that report failures as `AppError`.
//!
//! axum's own `Json` and `Path` reject malformed input with plain-text bodies and
//! varying status codes. These wrappers route the rejection through `AppError` so
//! every failed request answers with an `ErrorDto`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// JSON request body, rejected with 400 and an `ErrorDto`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameters, rejected with 400 and an `ErrorDto`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
