//! Expected fee computation
//!
//! Computes the fee a contract's terms predict for one billing period.
//! Percentage contracts multiply the AUM snapshot by the pre-scaled
//! per-period rate; flat contracts return the fixed amount unchanged.
//!
//! Results are full precision. Rounding to cents is an explicit caller
//! choice via `round_to_cents`, not something baked into the math.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use plan_types::contract::{FeeTerms, FeeType};
use plan_types::errors::FeeError;

/// Compute the expected periodic fee for a contract.
///
/// `total_assets` is the AUM snapshot for the period. It is required for
/// percentage contracts and ignored for flat contracts.
///
/// `percent_rate` is already a per-period fraction (0.0007 = 0.07% of
/// AUM), so the result is a plain `aum * rate` with no division by 100.
pub fn expected_fee(
    terms: &FeeTerms,
    total_assets: Option<Decimal>,
) -> Result<Decimal, FeeError> {
    match terms.fee_type {
        FeeType::Percentage => {
            let rate = terms.percent_rate.ok_or_else(|| {
                FeeError::InvalidConfiguration {
                    reason: "percentage contract has no percent_rate".to_string(),
                }
            })?;
            let aum = total_assets.ok_or_else(|| FeeError::InvalidConfiguration {
                reason: "percentage contract requires total assets".to_string(),
            })?;
            Ok(aum * rate)
        }
        FeeType::Flat => terms
            .flat_rate
            .ok_or_else(|| FeeError::InvalidConfiguration {
                reason: "flat contract has no flat_rate".to_string(),
            }),
    }
}

/// Round a currency amount to cents, HALF-UP.
///
/// Display and persistence round; the engine itself never does.
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
