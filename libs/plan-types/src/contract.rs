//! Contract and fee term types
//!
//! A contract records the fee terms a provider bills under: either a
//! percentage of assets under management per period, or a flat amount
//! per period. Exactly one of the two rate fields is meaningful,
//! selected by the fee type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::errors::FeeError;
use crate::ids::{ClientId, ContractId};
use crate::period::PaymentSchedule;

/// How a contract's periodic fee is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeType {
    /// Fee is `total_assets * percent_rate` per period
    Percentage,
    /// Fee is a fixed currency amount per period
    Flat,
}

impl FeeType {
    /// Stable lowercase name matching the upstream data store
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeType::Percentage => "percentage",
            FeeType::Flat => "flat",
        }
    }
}

impl FromStr for FeeType {
    type Err = FeeError;

    /// Parse the upstream data store's fee type literal.
    ///
    /// Anything outside the recognized enumeration is a data-integrity
    /// problem and is reported as `UnknownFeeType`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "percentage" => Ok(FeeType::Percentage),
            "flat" => Ok(FeeType::Flat),
            other => Err(FeeError::UnknownFeeType {
                fee_type: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for FeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fee terms for a contract.
///
/// `percent_rate` is a pre-scaled per-period fraction: 0.0007 means
/// 0.07% of AUM per period, NOT 0.07. No division by 100 happens
/// anywhere downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeTerms {
    pub fee_type: FeeType,
    /// Per-period fraction of AUM; meaningful when `fee_type` is Percentage
    pub percent_rate: Option<Decimal>,
    /// Fixed per-period amount; meaningful when `fee_type` is Flat
    pub flat_rate: Option<Decimal>,
}

impl FeeTerms {
    /// Percentage-of-AUM terms
    pub fn percentage(rate: Decimal) -> Self {
        Self {
            fee_type: FeeType::Percentage,
            percent_rate: Some(rate),
            flat_rate: None,
        }
    }

    /// Flat-amount terms
    pub fn flat(amount: Decimal) -> Self {
        Self {
            fee_type: FeeType::Flat,
            percent_rate: None,
            flat_rate: Some(amount),
        }
    }
}

/// A provider contract for a client plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub contract_id: ContractId,
    pub client_id: ClientId,
    pub provider_name: String,
    pub contract_number: Option<String>,
    pub contract_start_date: Option<NaiveDate>,
    #[serde(flatten)]
    pub fee_terms: FeeTerms,
    pub payment_schedule: PaymentSchedule,
    pub num_people: Option<u32>,
    pub notes: Option<String>,
}

impl Contract {
    /// Create a contract with fresh IDs left to the caller
    pub fn new(
        client_id: ClientId,
        provider_name: impl Into<String>,
        fee_terms: FeeTerms,
        payment_schedule: PaymentSchedule,
    ) -> Self {
        Self {
            contract_id: ContractId::new(),
            client_id,
            provider_name: provider_name.into(),
            contract_number: None,
            contract_start_date: None,
            fee_terms,
            payment_schedule,
            num_people: None,
            notes: None,
        }
    }
}
