//! Error types for the payment tracking system
//!
//! Error taxonomy using thiserror. Failures are returned synchronously
//! to the immediate caller; nothing here is retriable.

use thiserror::Error;

/// Top-level error for payment processing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaymentError {
    #[error("Fee error: {0}")]
    Fee(#[from] FeeError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Fee computation errors
///
/// These indicate bad contract data, not transient conditions, so the
/// caller must surface them rather than retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeeError {
    /// A rate or AUM field required by the declared fee type is missing
    #[error("invalid fee configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Fee type outside the recognized enumeration
    #[error("unknown fee type: {fee_type}")]
    UnknownFeeType { fee_type: String },
}

/// Payment input validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("{field} cannot be negative: {value}")]
    NegativeAmount { field: &'static str, value: String },

    #[error("{field} value seems unrealistic: {value}")]
    UnrealisticAmount { field: &'static str, value: String },

    #[error("{field} cannot be in the future: {date}")]
    FutureDate { field: &'static str, date: String },

    #[error("invalid period {period} for {schedule} schedule")]
    InvalidPeriod { period: u8, schedule: String },

    #[error("cannot record a payment for a future period: {period}")]
    FuturePeriod { period: String },

    #[error("period {period} is too old (more than {max_age_years} years)")]
    StalePeriod { period: String, max_age_years: i32 },
}
