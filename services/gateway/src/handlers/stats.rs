use crate::models::{HistoricalStatsResponse, ProtocolStats};
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET /stats/protocol
pub async fn get_protocol_statistics(State(state): State<AppState>) -> Json<ProtocolStats> {
    Json(state.catalog.protocol_stats.clone())
}

/// GET /stats/historical
pub async fn get_historical_tvl_and_volume(
    State(state): State<AppState>,
) -> Json<HistoricalStatsResponse> {
    Json(HistoricalStatsResponse {
        historical: state.catalog.historical_stats.clone(),
    })
}
