use sea_orm::DatabaseConnection;

use crate::model::system::{HealthStatus, SystemHealthDto};

/// Version reported by the health endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct SystemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SystemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reports whether the database is reachable along with the application version
    ///
    /// A failed ping is reported as `Offline` and logged; this method never returns an
    /// error so the health endpoint always answers.
    pub async fn health(&self) -> SystemHealthDto {
        let database_status = match self.db.ping().await {
            Ok(()) => HealthStatus::Online,
            Err(e) => {
                tracing::warn!("Database ping failed: {}", e);
                HealthStatus::Offline
            }
        };

        SystemHealthDto {
            database_status,
            version: VERSION.to_string(),
        }
    }
}
