use crate::models::{HealthResponse, ServiceInfo};
use crate::state::AppState;
use axum::{extract::State, Json};
use stablecoin_types::timestamp::MillisTimestamp;

/// GET /
pub async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: state.config.service_name.clone(),
        status: "running",
    })
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "API is running",
        timestamp: MillisTimestamp::now(),
    })
}
