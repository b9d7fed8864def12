//! Variance status and result types
//!
//! The deviation between an expected and an actual fee is classified
//! into one of four statuses, ordered by severity. Warning and Alert
//! statuses flag a payment for operations review.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of how far an actual fee deviates from expected.
///
/// Ordered by severity: `Exact < Acceptable < Warning < Alert`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum VarianceStatus {
    /// Absolute difference under one cent
    Exact,
    /// Within 5% of expected
    Acceptable,
    /// Within 15% of expected
    Warning,
    /// More than 15% off expected (or expected is zero while actual is not)
    Alert,
}

impl VarianceStatus {
    /// Stable lowercase name matching the upstream data store
    pub fn as_str(&self) -> &'static str {
        match self {
            VarianceStatus::Exact => "exact",
            VarianceStatus::Acceptable => "acceptable",
            VarianceStatus::Warning => "warning",
            VarianceStatus::Alert => "alert",
        }
    }

    /// True for statuses that should be surfaced to the review queue
    pub fn is_review_required(&self) -> bool {
        matches!(self, VarianceStatus::Warning | VarianceStatus::Alert)
    }
}

impl fmt::Display for VarianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full variance computation output for one payment.
///
/// `variance_percent` is `None` exactly when `expected_fee` is zero: the
/// percentage is mathematically undefined there. A deviation of at least
/// a cent off a zero expected fee forces the status to Alert instead of
/// propagating a division by zero; a sub-cent deviation still counts as
/// Exact, with the percent left undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarianceResult {
    pub expected_fee: Decimal,
    pub actual_fee: Decimal,
    /// `actual_fee - expected_fee`, signed
    pub variance_amount: Decimal,
    /// `variance_amount / expected_fee * 100`, signed, full precision
    pub variance_percent: Option<Decimal>,
    pub status: VarianceStatus,
}
