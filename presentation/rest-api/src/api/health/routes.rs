use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Service name
    pub service: String,
    /// Service version
    pub version: String,
    /// Current server timestamp
    pub timestamp: String,
}

/// Liveness endpoint for load balancers and container probes.
pub struct HealthApi;

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Returns `healthy` while the process is serving requests. The database
    /// is not probed.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            service: "shopping-list-api".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
