use crate::error::{ApiError, ApiResponse};
use crate::extract::{ApiJson, ApiQuery};
use crate::models::{BurnRequest, ClusterQuery, MintRequest, TransactionData};
use crate::state::AppState;
use axum::extract::State;
use stablecoin_types::errors::ErrorKind;
use stablecoin_types::fee;
use stablecoin_types::stablecoin::{QuoteType, StablecoinIndex};
use stablecoin_types::validation::{require_positive_amount, require_supported_index, IndexFamily};
use tracing::{info, instrument, warn};

/// A mint or burn that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionIntent {
    pub index: StablecoinIndex,
    pub deposit_amount: i64,
    /// What the quote engine says the signer would receive
    pub expected_output: i64,
}

impl TransactionIntent {
    pub fn satisfies(&self, minimum_received: i64) -> bool {
        self.expected_output >= minimum_received
    }
}

/// Amount check first, then index support (404 family).
pub fn validate_transaction(
    quote_type: QuoteType,
    stablecoin_index: i64,
    deposit_amount: i64,
) -> Result<TransactionIntent, ErrorKind> {
    let amount = require_positive_amount(deposit_amount)?;
    let index = require_supported_index(stablecoin_index, IndexFamily::Transaction)?;
    Ok(TransactionIntent {
        index,
        deposit_amount: amount.value(),
        expected_output: fee::quote(quote_type, amount),
    })
}

fn log_intent(
    action: &str,
    signer: &str,
    intent: &TransactionIntent,
    minimum_received: i64,
    cluster: Option<&str>,
) {
    if !intent.satisfies(minimum_received) {
        warn!(
            action,
            expected_output = intent.expected_output,
            minimum_received,
            "simulated transaction would not meet minimumReceived"
        );
    }
    info!(
        action,
        signer,
        index = %intent.index,
        deposit_amount = intent.deposit_amount,
        expected_output = intent.expected_output,
        cluster = cluster.unwrap_or("default"),
        "simulated transaction generated"
    );
}

/// POST /stablecoin/mint
#[instrument(skip_all)]
pub async fn generate_mint_transaction(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ClusterQuery>,
    ApiJson(payload): ApiJson<MintRequest>,
) -> Result<ApiResponse<TransactionData>, ApiError> {
    let intent = validate_transaction(
        QuoteType::Mint,
        payload.stablecoin_index,
        payload.deposit_amount,
    )?;
    log_intent(
        "mint",
        &payload.signer,
        &intent,
        payload.minimum_received,
        query.cluster.as_deref(),
    );

    Ok(ApiResponse(TransactionData {
        transaction: state.catalog.transaction.clone(),
    }))
}

/// POST /stablecoin/burn
#[instrument(skip_all)]
pub async fn generate_burn_transaction(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ClusterQuery>,
    ApiJson(payload): ApiJson<BurnRequest>,
) -> Result<ApiResponse<TransactionData>, ApiError> {
    let intent = validate_transaction(
        QuoteType::Redeem,
        payload.stablecoin_index,
        payload.deposit_amount,
    )?;
    log_intent(
        "burn",
        &payload.signer,
        &intent,
        payload.minimum_received,
        query.cluster.as_deref(),
    );

    Ok(ApiResponse(TransactionData {
        transaction: state.catalog.transaction.clone(),
    }))
}
