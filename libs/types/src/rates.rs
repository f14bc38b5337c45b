//! Exchange-rate and APY payloads
//!
//! USD values are integer basis points on a 1e8 scale
//! (`100_000_000` bps = $1.00). APY in listings is plain bps
//! (`224` = 2.24%); the historical APY point is a percentage number.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::stablecoin::StablecoinIndex;
use crate::timestamp::{MillisTimestamp, SecondsTimestamp};

/// $1.00 expressed in USD-value basis points
pub const USD_ONE_BPS: u64 = 100_000_000;

/// Convert a USD-value bps figure to dollars.
pub fn bps_to_usd(bps: u64) -> Decimal {
    Decimal::from(bps) / Decimal::from(USD_ONE_BPS)
}

/// Current APY for one stablecoin (`GET /stablecoin/apy`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApyData {
    pub index: StablecoinIndex,
    /// Basis points, 1% = 100
    pub apy: u32,
    pub timestamp: MillisTimestamp,
}

/// Historical APY point (`GET /stablecoin/{index}/apy/historical`)
///
/// `index` echoes the request path as given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalApyData {
    pub index: i64,
    /// Percent, e.g. `5.25`
    #[serde(with = "rust_decimal::serde::float")]
    pub apy: Decimal,
    pub timestamp: SecondsTimestamp,
}

/// One exchange-rate snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExchangeRateData {
    pub id: u64,
    pub stablecoin: i64,
    pub base_usd_value_bps: u64,
    pub receipt_usd_value_bps: u64,
    pub timestamp: MillisTimestamp,
}

impl ExchangeRateData {
    /// Same snapshot labelled for another stablecoin index.
    pub fn for_stablecoin(&self, stablecoin: i64) -> Self {
        Self {
            stablecoin,
            ..self.clone()
        }
    }
}

/// Realtime base/receipt rate (`GET /stablecoin/{index}/exchange-rate`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RealtimeExchangeRate {
    pub base: u64,
    pub receipt: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_historical_apy_serializes_as_number() {
        let point = HistoricalApyData {
            index: 0,
            apy: Decimal::new(525, 2),
            timestamp: "2023-11-07T05:31:56Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"index":0,"apy":5.25,"timestamp":"2023-11-07T05:31:56Z"}"#);
    }

    #[test]
    fn test_exchange_rate_field_names() {
        let rate = ExchangeRateData {
            id: 105511,
            stablecoin: 0,
            base_usd_value_bps: 1016789908,
            receipt_usd_value_bps: 1016791576,
            timestamp: "2025-12-19T17:04:08.502Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&rate).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"id":105511,"stablecoin":0,"base_usd_value_bps":1016789908,"#,
                r#""receipt_usd_value_bps":1016791576,"timestamp":"2025-12-19T17:04:08.502Z"}"#
            )
        );

        let relabelled = rate.for_stablecoin(7);
        assert_eq!(relabelled.stablecoin, 7);
        assert_eq!(relabelled.id, rate.id);
    }

    #[test]
    fn test_usd_conversion() {
        assert_eq!(bps_to_usd(USD_ONE_BPS), Decimal::ONE);
        assert_eq!(bps_to_usd(1016858791), Decimal::new(1016858791, 8));
        assert!(bps_to_usd(1016858791) > Decimal::ONE);
    }
}
