use crate::error::{ApiError, ApiResponse};
use crate::extract::{ApiPath, ApiQuery};
use crate::models::HistoricalRatesQuery;
use crate::state::AppState;
use axum::extract::State;
use stablecoin_types::rates::{bps_to_usd, ExchangeRateData, RealtimeExchangeRate};
use stablecoin_types::stablecoin::SUPPORTED_STABLECOIN_INDEX;
use stablecoin_types::validation::{require_period, require_supported_index, IndexFamily};
use tracing::{debug, instrument};

fn labelled(rates: &[ExchangeRateData], stablecoin: i64) -> Vec<ExchangeRateData> {
    rates.iter().map(|rate| rate.for_stablecoin(stablecoin)).collect()
}

/// GET /stablecoin/exchange-rates?stablecoin=&days=
///
/// Latest snapshot, labelled for the requested stablecoin.
#[instrument(skip(state))]
pub async fn get_exchange_rates(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<HistoricalRatesQuery>,
) -> Result<ApiResponse<Vec<ExchangeRateData>>, ApiError> {
    let period = require_period(query.days)?;
    let stablecoin = query.stablecoin.unwrap_or(SUPPORTED_STABLECOIN_INDEX);
    debug!(stablecoin, days = ?period.map(|p| p.days()), "exchange rates requested");

    Ok(ApiResponse(labelled(&state.catalog.latest_rates, stablecoin)))
}

/// GET /stablecoin/exchange-rates/latest
pub async fn get_latest_exchange_rates(
    State(state): State<AppState>,
) -> ApiResponse<Vec<ExchangeRateData>> {
    ApiResponse(state.catalog.latest_rates.clone())
}

/// GET /stablecoin/exchange-rates/historical?stablecoin=&days=
#[instrument(skip(state))]
pub async fn get_historical_exchange_rates(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<HistoricalRatesQuery>,
) -> Result<ApiResponse<Vec<ExchangeRateData>>, ApiError> {
    let period = require_period(query.days)?;
    let stablecoin = query.stablecoin.unwrap_or(SUPPORTED_STABLECOIN_INDEX);
    debug!(stablecoin, days = ?period.map(|p| p.days()), "historical rates requested");

    Ok(ApiResponse(labelled(&state.catalog.historical_rates, stablecoin)))
}

/// GET /stablecoin/{index}/exchange-rate
///
/// Unsupported indices answer 400, not 404, on this route.
#[instrument(skip(state))]
pub async fn get_realtime_exchange_rate(
    State(state): State<AppState>,
    ApiPath(index): ApiPath<i64>,
) -> Result<ApiResponse<RealtimeExchangeRate>, ApiError> {
    require_supported_index(index, IndexFamily::RealtimeRate)?;

    let rate = state.catalog.realtime_rate;
    debug!(
        base_usd = %bps_to_usd(rate.base),
        receipt_usd = %bps_to_usd(rate.receipt),
        "realtime rate"
    );
    Ok(ApiResponse(rate))
}
