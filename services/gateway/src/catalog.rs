//! Simulated protocol data
//!
//! Every value a handler serves without computing it lives here. The catalog
//! is built once at start-up and shared read-only; handlers never mutate it,
//! so identical requests always produce identical bodies.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use stablecoin_types::rates::{ApyData, ExchangeRateData, RealtimeExchangeRate};
use stablecoin_types::stablecoin::{Stablecoin, StablecoinIndex};
use stablecoin_types::timestamp::SecondsTimestamp;
use thiserror::Error;

use crate::models::{EventKind, ProtocolEvent, ProtocolStats, SupplyCap, TvlVolumePoint};

/// Placeholder serialized transaction returned by mint and burn.
pub const SIMULATED_TRANSACTION: &str = concat!(
    "AQAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
    "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABAAED...",
);

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog literal {literal:?}: {source}")]
    Literal {
        literal: &'static str,
        source: chrono::ParseError,
    },
}

/// The single historical APY point served for every index
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalApyPoint {
    pub apy: Decimal,
    pub timestamp: SecondsTimestamp,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub stablecoins: Vec<Stablecoin>,
    pub apy: Vec<ApyData>,
    pub historical_apy: HistoricalApyPoint,
    pub latest_rates: Vec<ExchangeRateData>,
    /// Labelled for index 0; handlers relabel to the requested index.
    pub historical_rates: Vec<ExchangeRateData>,
    pub realtime_rate: RealtimeExchangeRate,
    pub transaction: String,
    pub supply_caps: Vec<SupplyCap>,
    pub protocol_stats: ProtocolStats,
    pub historical_stats: Vec<TvlVolumePoint>,
    pub recent_events: Vec<ProtocolEvent>,
    pub signer_events: Vec<ProtocolEvent>,
}

fn parse<T>(literal: &'static str) -> Result<T, CatalogError>
where
    T: std::str::FromStr<Err = chrono::ParseError>,
{
    literal
        .parse()
        .map_err(|source| CatalogError::Literal { literal, source })
}

fn rate(
    id: u64,
    base_usd_value_bps: u64,
    receipt_usd_value_bps: u64,
    timestamp: &'static str,
) -> Result<ExchangeRateData, CatalogError> {
    Ok(ExchangeRateData {
        id,
        stablecoin: StablecoinIndex::USDC_PLUS.value(),
        base_usd_value_bps,
        receipt_usd_value_bps,
        timestamp: parse(timestamp)?,
    })
}

fn event(id: &str, kind: Option<EventKind>) -> ProtocolEvent {
    ProtocolEvent {
        id: id.to_string(),
        kind,
    }
}

impl Catalog {
    /// Data mirroring the live API's published responses.
    pub fn reference() -> Result<Self, CatalogError> {
        Ok(Self {
            stablecoins: Stablecoin::supported(),
            apy: vec![ApyData {
                index: StablecoinIndex::USDC_PLUS,
                apy: 224,
                timestamp: parse("2025-12-19T16:55:42.407Z")?,
            }],
            historical_apy: HistoricalApyPoint {
                apy: Decimal::new(525, 2),
                timestamp: parse("2023-11-07T05:31:56Z")?,
            },
            latest_rates: vec![rate(105511, 1016789908, 1016791576, "2025-12-19T17:04:08.502Z")?],
            historical_rates: vec![
                rate(104135, 1016733625, 1016733625, "2025-12-18T17:46:10.274Z")?,
                rate(104137, 1016728666, 1016728667, "2025-12-18T17:47:08.161Z")?,
            ],
            realtime_rate: RealtimeExchangeRate {
                base: 1016858791,
                receipt: 1016858791,
            },
            transaction: SIMULATED_TRANSACTION.to_string(),
            supply_caps: vec![
                SupplyCap {
                    symbol: "rUSD".to_string(),
                    cap: "10_000_000".to_string(),
                },
                SupplyCap {
                    symbol: "rEUR".to_string(),
                    cap: "5_000_000".to_string(),
                },
            ],
            protocol_stats: ProtocolStats {
                tvl: "2000000".to_string(),
                total_minted: "1500000".to_string(),
            },
            historical_stats: vec![
                TvlVolumePoint {
                    date: parse::<NaiveDate>("2025-12-13")?,
                    tvl: 1_000_000,
                    volume: 20_000,
                },
                TvlVolumePoint {
                    date: parse::<NaiveDate>("2025-12-14")?,
                    tvl: 1_100_000,
                    volume: 25_000,
                },
            ],
            recent_events: vec![
                event("evt_100", Some(EventKind::Mint)),
                event("evt_101", Some(EventKind::Burn)),
            ],
            signer_events: vec![event("evt_200", None), event("evt_201", None)],
        })
    }
}
