use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reachability of a backend service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Online,
    Offline,
}

/// Health information about the running system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SystemHealthDto {
    /// Whether the database answered a ping.
    pub database_status: HealthStatus,
    /// Version of the application.
    pub version: String,
}
