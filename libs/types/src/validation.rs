//! Request validation rules
//!
//! Each rule is a pure function from a raw request field to either a
//! validated value or an [`ErrorKind`]. Handlers chain them with `?` in the
//! fixed precedence order:
//!
//! 1. amount positivity
//! 2. index support
//! 3. operation type
//! 4. period (days)
//!
//! so the first failing rule decides the response.

use serde::Serialize;

use crate::errors::ErrorKind;
use crate::stablecoin::{QuoteType, StablecoinIndex};

/// Default look-back for historical APY when `days` is absent
pub const DEFAULT_HISTORY_DAYS: i64 = 365;

/// A deposit or burn amount known to be `> 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DepositAmount(i64);

impl DepositAmount {
    pub fn new(raw: i64) -> Result<Self, ErrorKind> {
        if raw > 0 {
            Ok(Self(raw))
        } else {
            Err(ErrorKind::InvalidAmount)
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// A look-back period in days, known to be `>= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Period(i64);

impl Period {
    pub fn new(days: i64) -> Result<Self, ErrorKind> {
        if days >= 1 {
            Ok(Self(days))
        } else {
            Err(ErrorKind::InvalidAmount)
        }
    }

    pub fn days(&self) -> i64 {
        self.0
    }
}

/// How an endpoint family reports an unsupported stablecoin index.
///
/// The mint/burn routes answer 404 "not found"; the realtime exchange-rate
/// route answers 400 with the generic invalid-request message. Both are
/// reproduced as the live API serves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexFamily {
    /// `POST /mint`, `POST /burn`
    Transaction,
    /// `GET /{index}/exchange-rate`
    RealtimeRate,
}

impl IndexFamily {
    fn rejection(&self) -> ErrorKind {
        match self {
            IndexFamily::Transaction => ErrorKind::UnsupportedIndex,
            IndexFamily::RealtimeRate => ErrorKind::InvalidAmount,
        }
    }
}

/// Rule 1: deposit/burn amount must be positive.
pub fn require_positive_amount(raw: i64) -> Result<DepositAmount, ErrorKind> {
    DepositAmount::new(raw)
}

/// Rule 2: stablecoin index must be the supported one.
pub fn require_supported_index(
    raw: i64,
    family: IndexFamily,
) -> Result<StablecoinIndex, ErrorKind> {
    StablecoinIndex::try_from(raw).map_err(|_| family.rejection())
}

/// Rule 3: path operation must be `mint` or `redeem`, any case.
pub fn parse_quote_type(raw: &str) -> Result<QuoteType, ErrorKind> {
    raw.parse()
}

/// Rule 4: `days`, when present, must be at least 1.
pub fn require_period(days: Option<i64>) -> Result<Option<Period>, ErrorKind> {
    days.map(Period::new).transpose()
}

/// Rule 4 with the historical-APY default applied.
pub fn period_or_default(days: Option<i64>) -> Result<Period, ErrorKind> {
    Period::new(days.unwrap_or(DEFAULT_HISTORY_DAYS))
}
