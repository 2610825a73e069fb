//! DTOs for health check endpoint.

use serde::Serialize;

/// Overall service health: `healthy` or `degraded`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
    pub pool: PoolStatus,
}

/// Result of a single probe.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Connection pool occupancy at the time of the probe.
#[derive(Debug, Serialize)]
pub struct PoolStatus {
    pub size: u32,
    pub idle: usize,
}
