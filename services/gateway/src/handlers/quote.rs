use crate::error::{ApiError, ApiResponse};
use crate::extract::{ApiJson, ApiPath};
use crate::models::QuoteRequest;
use stablecoin_types::errors::ErrorKind;
use stablecoin_types::fee;
use stablecoin_types::validation::{parse_quote_type, require_positive_amount};
use tracing::{debug, instrument};

/// Amount check first, then the operation type.
pub fn quote_for(raw_type: &str, request: &QuoteRequest) -> Result<i64, ErrorKind> {
    let amount = require_positive_amount(request.deposit_amount)?;
    let quote_type = parse_quote_type(raw_type)?;
    Ok(fee::quote(quote_type, amount))
}

/// POST /stablecoin/quote/{type}
#[instrument(skip(payload))]
pub async fn get_mint_redeem_quote(
    ApiPath(quote_type): ApiPath<String>,
    ApiJson(payload): ApiJson<QuoteRequest>,
) -> Result<ApiResponse<i64>, ApiError> {
    let quoted = quote_for(&quote_type, &payload)?;
    debug!(
        deposit_amount = payload.deposit_amount,
        stablecoin_index = payload.stablecoin_index,
        quoted,
        "quote computed"
    );
    Ok(ApiResponse(quoted))
}
