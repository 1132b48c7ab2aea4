//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the JSON request and response bodies of every endpoint and carry
//! `utoipa` schemas for the generated OpenAPI document. Server-side domain models are
//! converted to and from these DTOs at the controller boundary.

pub mod api;
pub mod card;
pub mod deck;
pub mod system;
pub mod tag;
