//! Payment schedules and billing periods
//!
//! A billing period is the month (1-12) or quarter (1-4) a payment is
//! applied against, together with its year. Periods order chronologically
//! within a schedule, and `previous()` handles the year rollover
//! (January looks back to December of the prior year, Q1 to Q4).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ValidationError;

/// How often a contract bills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentSchedule {
    Monthly,
    Quarterly,
}

impl PaymentSchedule {
    /// Number of billing periods per year (12 or 4)
    pub fn periods_per_year(&self) -> u8 {
        match self {
            PaymentSchedule::Monthly => 12,
            PaymentSchedule::Quarterly => 4,
        }
    }

    /// Stable lowercase name matching the upstream data store
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentSchedule::Monthly => "monthly",
            PaymentSchedule::Quarterly => "quarterly",
        }
    }
}

impl fmt::Display for PaymentSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A year + period pair identifying one billing cycle.
///
/// Ordering is chronological: first by year, then by period number.
/// The period number's valid range depends on the schedule, which is
/// enforced at construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BillingPeriod {
    pub year: i32,
    pub period: u8,
}

impl BillingPeriod {
    /// Create a billing period, validating the period number against the
    /// schedule (1-12 monthly, 1-4 quarterly).
    pub fn new(
        schedule: PaymentSchedule,
        year: i32,
        period: u8,
    ) -> Result<Self, ValidationError> {
        if period < 1 || period > schedule.periods_per_year() {
            return Err(ValidationError::InvalidPeriod {
                period,
                schedule: schedule.as_str().to_string(),
            });
        }
        Ok(Self { year, period })
    }

    /// The billing period that contains a calendar date.
    pub fn containing(schedule: PaymentSchedule, date: NaiveDate) -> Self {
        let month = date.month() as u8;
        let period = match schedule {
            PaymentSchedule::Monthly => month,
            PaymentSchedule::Quarterly => (month - 1) / 3 + 1,
        };
        Self {
            year: date.year(),
            period,
        }
    }

    /// The immediately preceding billing period, rolling the year back
    /// when crossing the January/Q1 boundary.
    pub fn previous(self, schedule: PaymentSchedule) -> Self {
        if self.period == 1 {
            Self {
                year: self.year - 1,
                period: schedule.periods_per_year(),
            }
        } else {
            Self {
                year: self.year,
                period: self.period - 1,
            }
        }
    }

    /// Human-readable label ("2025-06" monthly, "2025-Q2" quarterly).
    pub fn label(&self, schedule: PaymentSchedule) -> String {
        match schedule {
            PaymentSchedule::Monthly => format!("{}-{:02}", self.year, self.period),
            PaymentSchedule::Quarterly => format!("{}-Q{}", self.year, self.period),
        }
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.period)
    }
}
