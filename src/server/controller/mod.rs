//! HTTP request handlers.
//!
//! Controllers translate between the wire and the service layer: they extract path
//! and body values, convert DTOs into parameter types, call the matching service, and
//! turn domain models back into DTOs. Every handler is annotated with
//! `#[utoipa::path]` so the router can assemble the OpenAPI document from it.

pub mod card;
pub mod deck;
pub mod system;
pub mod tag;

#[cfg(test)]
mod test;
