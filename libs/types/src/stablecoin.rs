//! Stablecoin identity and operation types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ErrorKind;

/// The only stablecoin index the protocol currently serves (USDC+).
pub const SUPPORTED_STABLECOIN_INDEX: i64 = 0;

/// A stablecoin index that passed the support check
///
/// Requests carry the raw `i64`; only `TryFrom<i64>` produces this type, so
/// holding one proves the index is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StablecoinIndex(i64);

impl StablecoinIndex {
    pub const USDC_PLUS: StablecoinIndex = StablecoinIndex(SUPPORTED_STABLECOIN_INDEX);

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Display name of the stablecoin
    pub fn name(&self) -> &'static str {
        "USDC+"
    }
}

impl TryFrom<i64> for StablecoinIndex {
    type Error = ErrorKind;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        if raw == SUPPORTED_STABLECOIN_INDEX {
            Ok(StablecoinIndex(raw))
        } else {
            Err(ErrorKind::UnsupportedIndex)
        }
    }
}

impl fmt::Display for StablecoinIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Entry of the `GET /stablecoin/types` listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stablecoin {
    pub index: StablecoinIndex,
    pub name: String,
}

impl Stablecoin {
    pub fn new(index: StablecoinIndex) -> Self {
        Self {
            index,
            name: index.name().to_string(),
        }
    }

    /// Every stablecoin the protocol currently serves
    pub fn supported() -> Vec<Stablecoin> {
        vec![Stablecoin::new(StablecoinIndex::USDC_PLUS)]
    }
}

/// Which side of the mint/redeem pair a quote is for
///
/// Both sides use the same fee; the type only labels the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteType {
    Mint,
    Redeem,
}

impl QuoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteType::Mint => "mint",
            QuoteType::Redeem => "redeem",
        }
    }
}

impl FromStr for QuoteType {
    type Err = ErrorKind;

    /// Case-insensitive: `Mint`, `MINT` and `mint` are the same operation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("mint") {
            Ok(QuoteType::Mint)
        } else if s.eq_ignore_ascii_case("redeem") {
            Ok(QuoteType::Redeem)
        } else {
            Err(ErrorKind::UnsupportedOperation)
        }
    }
}

impl fmt::Display for QuoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
