use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::system::SystemHealthDto,
    server::{service::system::SystemService, state::AppState},
};

/// Tag for grouping system endpoints in OpenAPI documentation
pub static SYSTEM_TAG: &str = "system";

/// Report database reachability and the running version.
///
/// Always answers 200; an unreachable database is reported as `offline` in the body.
#[utoipa::path(
    get,
    path = "/api/system/health",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Current system health", body = SystemHealthDto)
    ),
)]
pub async fn get_health(State(state): State<AppState>) -> impl IntoResponse {
    let service = SystemService::new(&state.db);

    (StatusCode::OK, Json(service.health().await))
}

/// Liveness probe that never touches the database.
pub async fn health_check() -> &'static str {
    "definitely healthy"
}
