use crate::error::ApiError;
use crate::handlers::{
    apy, events, exchange_rate, health, quote, simulate, stablecoin, stats, transaction,
};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use stablecoin_types::errors::ErrorKind;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

fn stablecoin_routes(simulate_errors: bool) -> Router<AppState> {
    let routes = Router::new()
        .route("/types", get(stablecoin::get_available_stablecoins))
        .route("/supply-caps", get(stablecoin::get_supply_caps))
        .route("/quote/{type}", post(quote::get_mint_redeem_quote))
        .route("/mint", post(transaction::generate_mint_transaction))
        .route("/burn", post(transaction::generate_burn_transaction))
        .route("/apy", get(apy::get_all_apy))
        .route("/{index}/apy/historical", get(apy::get_historical_apy))
        .route("/exchange-rates", get(exchange_rate::get_exchange_rates))
        .route("/exchange-rates/latest", get(exchange_rate::get_latest_exchange_rates))
        .route(
            "/exchange-rates/historical",
            get(exchange_rate::get_historical_exchange_rates),
        )
        .route("/{index}/exchange-rate", get(exchange_rate::get_realtime_exchange_rate));

    if simulate_errors {
        routes.route(
            "/simulate-error/{endpoint}",
            get(simulate::simulate_internal_error),
        )
    } else {
        routes
    }
}

/// Unknown paths and methods still answer with an envelope.
async fn unsupported_route() -> ApiError {
    ApiError::Rejected(ErrorKind::UnsupportedOperation)
}

pub fn create_router(state: AppState) -> Router {
    let stats_routes = Router::new()
        .route("/protocol", get(stats::get_protocol_statistics))
        .route("/historical", get(stats::get_historical_tvl_and_volume));

    let events_routes = Router::new()
        .route("/recent", get(events::get_recent_events))
        .route("/by-signer", get(events::get_events_by_signer));

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .nest("/stablecoin", stablecoin_routes(state.config.simulate_errors))
        .nest("/stats", stats_routes)
        .nest("/events", events_routes)
        .fallback(unsupported_route)
        .method_not_allowed_fallback(unsupported_route)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
