use crate::error::ApiError;
use crate::extract::ApiQuery;
use crate::models::{RecentEventsResponse, SignerEventsResponse, SignerQuery};
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET /events/recent
pub async fn get_recent_events(State(state): State<AppState>) -> Json<RecentEventsResponse> {
    Json(RecentEventsResponse {
        events: state.catalog.recent_events.clone(),
    })
}

/// GET /events/by-signer?signer=
pub async fn get_events_by_signer(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SignerQuery>,
) -> Result<Json<SignerEventsResponse>, ApiError> {
    Ok(Json(SignerEventsResponse {
        signer: query.signer.unwrap_or_else(|| "unknown".to_string()),
        events: state.catalog.signer_events.clone(),
    }))
}
