//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Name uniqueness rules and partial-update merging
//! - **Error Mapping**: Turning repository outcomes into `EntityError` variants
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Services are stateless; every call resolves against the database from scratch.

pub mod card;
pub mod deck;
pub mod system;
pub mod tag;
