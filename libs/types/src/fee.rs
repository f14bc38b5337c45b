//! Fee calculation (the quote engine)
//!
//! All arithmetic is integer basis points. The fee is floored, so the quoted
//! output is always rounded in the protocol's favour and never exceeds the
//! deposit.

use serde::{Deserialize, Serialize};

use crate::stablecoin::QuoteType;
use crate::validation::DepositAmount;

/// 1 bps = 0.01%
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Flat fee applied to both mint and redeem quotes: 10 bps = 0.1%
pub const MINT_REDEEM_FEE_BPS: u32 = 10;

/// Basis-point fee schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub fee_bps: u32,
}

impl FeeSchedule {
    pub const fn new(fee_bps: u32) -> Self {
        Self { fee_bps }
    }

    /// `floor(amount * fee_bps / 10_000)`, widened so no `i64` overflows.
    pub fn fee_for(&self, amount: DepositAmount) -> i64 {
        let deposit = i128::from(amount.value());
        let fee = deposit * i128::from(self.fee_bps) / i128::from(BPS_DENOMINATOR);
        // Capped at the deposit, so it always fits back in i64.
        fee.min(deposit) as i64
    }

    /// Amount left after deducting the fee
    pub fn net_of_fee(&self, amount: DepositAmount) -> i64 {
        amount.value() - self.fee_for(amount)
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::new(MINT_REDEEM_FEE_BPS)
    }
}

/// Output amount for a mint or redeem of `amount`.
///
/// The operation does not change the arithmetic.
pub fn quote(_quote_type: QuoteType, amount: DepositAmount) -> i64 {
    FeeSchedule::default().net_of_fee(amount)
}
