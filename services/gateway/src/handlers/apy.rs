use crate::error::{ApiError, ApiResponse};
use crate::extract::{ApiPath, ApiQuery};
use crate::models::HistoricalApyQuery;
use crate::state::AppState;
use axum::extract::State;
use stablecoin_types::rates::{ApyData, HistoricalApyData};
use stablecoin_types::validation::period_or_default;
use tracing::{debug, instrument};

/// GET /stablecoin/apy
pub async fn get_all_apy(State(state): State<AppState>) -> ApiResponse<Vec<ApyData>> {
    ApiResponse(state.catalog.apy.clone())
}

/// GET /stablecoin/{index}/apy/historical?days=
///
/// The index is echoed back unvalidated; only `days` is checked.
#[instrument(skip(state, query))]
pub async fn get_historical_apy(
    State(state): State<AppState>,
    ApiPath(index): ApiPath<i64>,
    ApiQuery(query): ApiQuery<HistoricalApyQuery>,
) -> Result<ApiResponse<HistoricalApyData>, ApiError> {
    let period = period_or_default(query.days)?;
    debug!(days = period.days(), "historical apy requested");

    let point = &state.catalog.historical_apy;
    Ok(ApiResponse(HistoricalApyData {
        index,
        apy: point.apy,
        timestamp: point.timestamp,
    }))
}
