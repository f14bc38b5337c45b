//! Simulated failures
//!
//! Nothing reachable from ordinary input produces a 500; this route exists so
//! clients can exercise their handling of one.

use crate::error::{ApiError, ApiResponse};
use crate::extract::ApiPath;
use anyhow::anyhow;
use stablecoin_types::errors::ErrorKind;
use std::str::FromStr;

/// Endpoints whose failure can be simulated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatedEndpoint {
    Types,
    Quote,
    Mint,
    Burn,
    Apy,
    HistoricalApy,
    ExchangeRates,
    HistoricalExchangeRates,
    ExchangeRate,
}

impl FromStr for SimulatedEndpoint {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "types" => Ok(Self::Types),
            "quote" => Ok(Self::Quote),
            "mint" => Ok(Self::Mint),
            "burn" => Ok(Self::Burn),
            "apy" => Ok(Self::Apy),
            "historical-apy" => Ok(Self::HistoricalApy),
            "exchange-rates" => Ok(Self::ExchangeRates),
            "historical-exchange-rates" => Ok(Self::HistoricalExchangeRates),
            "exchange-rate" => Ok(Self::ExchangeRate),
            _ => Err(ErrorKind::UnsupportedOperation),
        }
    }
}

/// GET /stablecoin/simulate-error/{endpoint}
pub async fn simulate_internal_error(
    ApiPath(endpoint): ApiPath<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let target: SimulatedEndpoint = endpoint.parse()?;
    Err(ApiError::Internal(anyhow!("simulated failure for {target:?}")))
}
