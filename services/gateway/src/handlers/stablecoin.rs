use crate::error::ApiResponse;
use crate::models::SupplyCapsResponse;
use crate::state::AppState;
use axum::{extract::State, Json};
use stablecoin_types::stablecoin::Stablecoin;

/// GET /stablecoin/types
pub async fn get_available_stablecoins(
    State(state): State<AppState>,
) -> ApiResponse<Vec<Stablecoin>> {
    ApiResponse(state.catalog.stablecoins.clone())
}

/// GET /stablecoin/supply-caps
///
/// Served bare, without the envelope, matching the live API.
pub async fn get_supply_caps(State(state): State<AppState>) -> Json<SupplyCapsResponse> {
    Json(SupplyCapsResponse {
        supply_caps: state.catalog.supply_caps.clone(),
    })
}
