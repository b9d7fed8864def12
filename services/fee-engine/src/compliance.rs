//! Payment compliance status
//!
//! A contract is Paid when its most recent payment covers the billing
//! period currently owed. The owed period is always the *previous*
//! month or quarter: a fee for June is collected in July, so in July a
//! monthly contract owes for June, and in January it owes for December
//! of the prior year.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use plan_types::period::{BillingPeriod, PaymentSchedule};

/// Whether the currently owed billing period has been paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Due,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Paid => f.write_str("Paid"),
            PaymentStatus::Due => f.write_str("Due"),
        }
    }
}

/// The billing period currently owed as of `today`.
///
/// This is the period before the one containing `today`, with the year
/// rollover at the January/Q1 boundary.
pub fn current_billing_period(
    schedule: PaymentSchedule,
    today: NaiveDate,
) -> BillingPeriod {
    BillingPeriod::containing(schedule, today).previous(schedule)
}

/// Determine Paid/Due from the most recent payment's applied period.
///
/// `None` (no payments on record) is always Due. A payment applied to
/// the owed period or any later one counts as Paid.
pub fn payment_status(
    schedule: PaymentSchedule,
    last_payment_period: Option<BillingPeriod>,
    today: NaiveDate,
) -> PaymentStatus {
    let owed = current_billing_period(schedule, today);
    match last_payment_period {
        Some(period) if period >= owed => PaymentStatus::Paid,
        _ => PaymentStatus::Due,
    }
}
