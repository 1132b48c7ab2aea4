use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{card, deck, system, tag},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Flashcards API",
    description = "Decks, cards, and tags for a flashcard study tool"
))]
struct ApiDoc;

/// Builds the application router.
///
/// API routes are collected through `OpenApiRouter` so that the OpenAPI document
/// served at `/api/docs/openapi.json` always matches the mounted handlers.
pub fn router() -> Router<AppState> {
    let (api_router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(deck::get_decks, deck::create_deck))
        .routes(routes!(
            deck::get_deck_by_id,
            deck::update_deck,
            deck::delete_deck
        ))
        .routes(routes!(card::get_cards, card::create_card))
        .routes(routes!(
            card::get_card_by_id,
            card::update_card,
            card::delete_card
        ))
        .routes(routes!(tag::get_tags, tag::create_tag))
        .routes(routes!(tag::get_tag_by_id, tag::update_tag, tag::delete_tag))
        .routes(routes!(system::get_health))
        .split_for_parts();

    api_router
        .route("/health-check", get(system::health_check))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}
