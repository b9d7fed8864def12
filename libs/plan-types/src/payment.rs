//! Payment record types
//!
//! A payment is one observed fee receipt for a contract, applied against
//! a specific billing period. `total_assets` is the AUM snapshot supplied
//! on entry; it is only required for percentage-fee contracts.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::{ClientId, ContractId, PaymentId};
use crate::period::{BillingPeriod, PaymentSchedule};

/// A recorded fee payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: PaymentId,
    pub contract_id: ContractId,
    pub client_id: ClientId,
    /// Date the payment was received
    pub received_date: NaiveDate,
    /// AUM snapshot at entry; required for percentage contracts
    pub total_assets: Option<Decimal>,
    /// Fee the contract terms predicted for the period
    pub expected_fee: Decimal,
    /// Fee actually received
    pub actual_fee: Decimal,
    /// Free-text payment method ("Check", "Wire", "ACH", ...)
    pub method: Option<String>,
    pub notes: Option<String>,
    /// Schedule the applied period is expressed in
    pub applied_period_type: PaymentSchedule,
    /// Billing period this payment covers
    pub applied_period: BillingPeriod,
}

impl Payment {
    /// Create a payment record with a fresh time-sortable ID
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        contract_id: ContractId,
        client_id: ClientId,
        received_date: NaiveDate,
        total_assets: Option<Decimal>,
        expected_fee: Decimal,
        actual_fee: Decimal,
        applied_period_type: PaymentSchedule,
        applied_period: BillingPeriod,
    ) -> Self {
        Self {
            payment_id: PaymentId::new(),
            contract_id,
            client_id,
            received_date,
            total_assets,
            expected_fee,
            actual_fee,
            method: None,
            notes: None,
            applied_period_type,
            applied_period,
        }
    }
}
