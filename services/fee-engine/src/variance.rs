//! Variance classification
//!
//! Classifies the deviation between an expected and an actual fee into
//! a review status. Checks run in order, first match wins:
//!
//! 1. absolute difference under one cent → Exact
//! 2. expected is zero (percentage undefined) → Alert
//! 3. |variance percent| <= 5 → Acceptable
//! 4. |variance percent| <= 15 → Warning
//! 5. otherwise → Alert
//!
//! Boundaries are inclusive on the tighter side: exactly 5.00% is
//! Acceptable, exactly 15.00% is Warning. The one-cent tolerance is
//! strict: a difference of exactly 0.01 is not Exact.

use rust_decimal::Decimal;

use plan_types::variance::{VarianceResult, VarianceStatus};

/// Classification thresholds.
///
/// `exact_tolerance` is an absolute currency amount, independent of the
/// expected fee's magnitude. The percent bounds apply to the absolute
/// value of the signed variance percent.
#[derive(Debug, Clone, PartialEq)]
pub struct VarianceThresholds {
    /// Absolute difference below which the payment counts as exact
    pub exact_tolerance: Decimal,
    /// Upper bound (inclusive) for Acceptable, in percent
    pub acceptable_percent: Decimal,
    /// Upper bound (inclusive) for Warning, in percent
    pub warning_percent: Decimal,
}

impl Default for VarianceThresholds {
    fn default() -> Self {
        Self {
            exact_tolerance: Decimal::from_str_exact("0.01").unwrap(),
            acceptable_percent: Decimal::from(5),
            warning_percent: Decimal::from(15),
        }
    }
}

/// Signed variance percent, or `None` when expected is zero.
fn variance_percent(expected: Decimal, variance_amount: Decimal) -> Option<Decimal> {
    if expected == Decimal::ZERO {
        return None;
    }
    Some(variance_amount / expected * Decimal::from(100))
}

/// Full variance evaluation for one (expected, actual) pair.
///
/// When expected is zero and actual deviates by at least the tolerance,
/// the percentage is undefined; the result carries `variance_percent:
/// None` and is forced to Alert rather than dividing by zero.
pub fn evaluate(
    expected: Decimal,
    actual: Decimal,
    thresholds: &VarianceThresholds,
) -> VarianceResult {
    let variance_amount = actual - expected;
    let percent = variance_percent(expected, variance_amount);

    let status = if variance_amount.abs() < thresholds.exact_tolerance {
        VarianceStatus::Exact
    } else {
        match percent {
            None => VarianceStatus::Alert,
            Some(p) if p.abs() <= thresholds.acceptable_percent => {
                VarianceStatus::Acceptable
            }
            Some(p) if p.abs() <= thresholds.warning_percent => VarianceStatus::Warning,
            Some(_) => VarianceStatus::Alert,
        }
    };

    VarianceResult {
        expected_fee: expected,
        actual_fee: actual,
        variance_amount,
        variance_percent: percent,
        status,
    }
}

/// Status-only shortcut over [`evaluate`].
pub fn classify(
    expected: Decimal,
    actual: Decimal,
    thresholds: &VarianceThresholds,
) -> VarianceStatus {
    evaluate(expected, actual, thresholds).status
}
