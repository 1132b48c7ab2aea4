//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.
//!
//! Writes that can collide with a unique index or miss their target row report that through
//! `InsertOutcome` or `WriteOutcome` instead of an error, so callers can tell an expected
//! outcome apart from a storage fault.

pub mod card;
pub mod deck;
pub mod tag;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

/// Result of a single insert into a table with a unique name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome<T> {
    /// The row was inserted; holds the row as stored.
    Inserted(T),
    /// The insert would have violated a unique index and was not applied.
    Conflict,
}

/// Result of a single update against a table with a unique name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome<T> {
    /// The statement affected a row; holds the row as stored after the write.
    Written(T),
    /// No row exists with the targeted ID.
    Missing,
    /// The write would have violated a unique index and was not applied.
    Conflict,
}

/// Checks whether a database error was raised by a unique index.
///
/// # Arguments
/// - `err` - Error returned by an insert or update
///
/// # Returns
/// - `true` - The statement was rejected by a unique constraint
/// - `false` - Any other failure
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
