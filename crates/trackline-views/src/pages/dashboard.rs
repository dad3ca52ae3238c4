//! Dashboard page
//!
//! A single liveness probe against the backend's `health` field.

use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::graph::{GraphQueryExecutor, decode, documents};
use crate::models::HealthData;

/// Health status shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViewModel {
    pub status: HealthStatus,
    pub message: String,
}

/// Load the dashboard health view
pub async fn load(executor: &dyn GraphQueryExecutor) -> DashboardViewModel {
    let outcome = executor
        .execute(&documents::HEALTH_CHECK, Value::Null)
        .await
        .and_then(decode::<HealthData>);

    match outcome {
        Ok(data) => DashboardViewModel {
            status: HealthStatus::Ok,
            message: data.health,
        },
        Err(err) => {
            error!(error = %err, "GraphQL health check failed");
            DashboardViewModel {
                status: HealthStatus::Error,
                message: "Failed to connect to the backend.".to_string(),
            }
        }
    }
}
