use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of `POST /stablecoin/quote/{type}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// Carried for compatibility; quotes do not depend on it.
    pub stablecoin_index: i64,
    pub deposit_amount: i64,
}

/// Body of `POST /stablecoin/mint`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintRequest {
    pub stablecoin_index: i64,
    pub deposit_amount: i64,
    /// Base58 wallet public key
    pub signer: String,
    pub minimum_received: i64,
    #[serde(default)]
    pub collateral_mint: Option<String>,
}

/// Body of `POST /stablecoin/burn`
///
/// The live API takes snake_case here; camelCase is accepted too so a
/// mint body can be replayed against burn.
#[derive(Debug, Clone, Deserialize)]
pub struct BurnRequest {
    #[serde(alias = "stablecoinIndex")]
    pub stablecoin_index: i64,
    #[serde(alias = "depositAmount")]
    pub deposit_amount: i64,
    pub signer: String,
    #[serde(alias = "minimumReceived")]
    pub minimum_received: i64,
    #[serde(default, alias = "collateralMint")]
    pub collateral_mint: Option<String>,
}

/// `?cluster=mainnet|devnet`; accepted and logged, never changes the answer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClusterQuery {
    pub cluster: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoricalApyQuery {
    pub days: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoricalRatesQuery {
    pub stablecoin: Option<i64>,
    pub days: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignerQuery {
    pub signer: Option<String>,
}

/// `data` of a successful mint or burn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionData {
    /// Base64 serialized transaction, unsigned
    pub transaction: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub service: String,
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: &'static str,
    pub timestamp: stablecoin_types::timestamp::MillisTimestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplyCap {
    pub symbol: String,
    pub cap: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SupplyCapsResponse {
    pub supply_caps: Vec<SupplyCap>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtocolStats {
    pub tvl: String,
    pub total_minted: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TvlVolumePoint {
    pub date: NaiveDate,
    pub tvl: u64,
    pub volume: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoricalStatsResponse {
    pub historical: Vec<TvlVolumePoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Mint,
    Burn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtocolEvent {
    pub id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<EventKind>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentEventsResponse {
    pub events: Vec<ProtocolEvent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignerEventsResponse {
    pub signer: String,
    pub events: Vec<ProtocolEvent>,
}
