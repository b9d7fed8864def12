//! Payment input validation
//!
//! Field-level checks applied before a payment is recorded. Hard
//! failures (missing or negative amounts, bad periods) are returned as
//! `ValidationError`; a large-but-plausible deviation from the expected
//! fee is a soft flag the entry surface shows as a warning, not an
//! error.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use plan_types::contract::{FeeTerms, FeeType};
use plan_types::errors::ValidationError;
use plan_types::period::{BillingPeriod, PaymentSchedule};

/// Upper sanity bound for an AUM entry: $1 trillion.
///
/// Anything above this is assumed to be a data-entry slip (extra zeros),
/// not a real plan balance.
pub const MAX_REASONABLE_ASSETS: i64 = 1_000_000_000_000;

/// Outcome of the soft entry checks
#[derive(Debug, Clone, PartialEq)]
pub enum FeeEntryCheck {
    /// Values accepted without remark
    Accepted,
    /// Actual fee accepted, but deviates from the expected fee enough
    /// that the entry surface should ask the user to confirm
    HighDeviation { percent: Decimal },
    /// Received date accepted, but old enough that the entry surface
    /// should ask the user to confirm
    StaleReceipt { days_old: i64 },
}

/// Validate the AUM entry for a contract.
///
/// Percentage contracts require an AUM snapshot; flat contracts accept
/// an absent value. A supplied value must be a non-negative, plausible
/// amount regardless of fee type.
pub fn validate_total_assets(
    terms: &FeeTerms,
    total_assets: Option<Decimal>,
) -> Result<(), ValidationError> {
    let value = match total_assets {
        Some(v) => v,
        None => {
            if terms.fee_type == FeeType::Percentage {
                return Err(ValidationError::MissingField {
                    field: "total assets",
                });
            }
            return Ok(());
        }
    };

    if value < Decimal::ZERO {
        return Err(ValidationError::NegativeAmount {
            field: "total assets",
            value: value.to_string(),
        });
    }
    if value > Decimal::from(MAX_REASONABLE_ASSETS) {
        return Err(ValidationError::UnrealisticAmount {
            field: "total assets",
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Validate the actual fee entry.
///
/// When an expected fee is available and positive, a deviation above
/// `warning_percent` (50% by default at the engine level) is flagged for
/// confirmation. Deviation at exactly the bound passes silently.
pub fn validate_actual_fee(
    actual_fee: Option<Decimal>,
    expected_fee: Option<Decimal>,
    warning_percent: Decimal,
) -> Result<FeeEntryCheck, ValidationError> {
    let actual = actual_fee.ok_or(ValidationError::MissingField {
        field: "actual fee",
    })?;

    if actual < Decimal::ZERO {
        return Err(ValidationError::NegativeAmount {
            field: "actual fee",
            value: actual.to_string(),
        });
    }

    if let Some(expected) = expected_fee {
        if expected > Decimal::ZERO {
            let deviation = (actual - expected).abs() / expected * Decimal::from(100);
            if deviation > warning_percent {
                return Ok(FeeEntryCheck::HighDeviation { percent: deviation });
            }
        }
    }

    Ok(FeeEntryCheck::Accepted)
}

/// Validate the date a payment was received.
///
/// A received date after `today` is a hard failure. A date more than
/// `stale_after_days` days back (30 by default at the engine level) is
/// accepted but flagged for confirmation; exactly at the bound passes
/// silently.
pub fn validate_received_date(
    received_date: NaiveDate,
    today: NaiveDate,
    stale_after_days: i64,
) -> Result<FeeEntryCheck, ValidationError> {
    if received_date > today {
        return Err(ValidationError::FutureDate {
            field: "received date",
            date: received_date.to_string(),
        });
    }
    let days_old = (today - received_date).num_days();
    if days_old > stale_after_days {
        return Ok(FeeEntryCheck::StaleReceipt { days_old });
    }
    Ok(FeeEntryCheck::Accepted)
}

/// Validate the billing period a payment is applied against.
///
/// The period must not lie in the future relative to `today`'s calendar
/// (payments are recorded for periods that have started), and must not
/// be older than `max_age_years` years.
pub fn validate_applied_period(
    schedule: PaymentSchedule,
    period: BillingPeriod,
    today: NaiveDate,
    max_age_years: i32,
) -> Result<(), ValidationError> {
    let current = BillingPeriod::containing(schedule, today);

    if period > current {
        return Err(ValidationError::FuturePeriod {
            period: period.label(schedule),
        });
    }
    if current.year - period.year > max_age_years {
        return Err(ValidationError::StalePeriod {
            period: period.label(schedule),
            max_age_years,
        });
    }
    Ok(())
}

/// Run all entry checks for a new payment in form order.
///
/// Returns the first hard failure, otherwise the first soft flag in
/// form order (received date before actual fee).
#[allow(clippy::too_many_arguments)]
pub fn validate_payment_input(
    terms: &FeeTerms,
    schedule: PaymentSchedule,
    period: BillingPeriod,
    received_date: NaiveDate,
    total_assets: Option<Decimal>,
    actual_fee: Option<Decimal>,
    expected_fee: Option<Decimal>,
    today: NaiveDate,
    warning_percent: Decimal,
    max_age_years: i32,
    stale_after_days: i64,
) -> Result<FeeEntryCheck, ValidationError> {
    validate_applied_period(schedule, period, today, max_age_years)?;
    let date_check = validate_received_date(received_date, today, stale_after_days)?;
    validate_total_assets(terms, total_assets)?;
    let fee_check = validate_actual_fee(actual_fee, expected_fee, warning_percent)?;

    if date_check != FeeEntryCheck::Accepted {
        return Ok(date_check);
    }
    Ok(fee_check)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_total_assets_required_for_percentage() {
        let terms = FeeTerms::percentage(dec("0.0007"));
        let err = validate_total_assets(&terms, None).unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { .. }));
    }

    #[test]
    fn test_total_assets_optional_for_flat() {
        let terms = FeeTerms::flat(dec("500"));
        assert!(validate_total_assets(&terms, None).is_ok());
    }

    #[test]
    fn test_total_assets_rejects_negative() {
        let terms = FeeTerms::percentage(dec("0.0007"));
        let err = validate_total_assets(&terms, Some(dec("-1000"))).unwrap_err();
        assert!(matches!(err, ValidationError::NegativeAmount { .. }));
    }

    #[test]
    fn test_total_assets_rejects_unrealistic() {
        let terms = FeeTerms::percentage(dec("0.0007"));
        let err =
            validate_total_assets(&terms, Some(dec("2000000000000"))).unwrap_err();
        assert!(matches!(err, ValidationError::UnrealisticAmount { .. }));
    }

    #[test]
    fn test_total_assets_accepts_boundaries() {
        let terms = FeeTerms::percentage(dec("0.0007"));
        assert!(validate_total_assets(&terms, Some(Decimal::ZERO)).is_ok());
        assert!(validate_total_assets(&terms, Some(dec("0.01"))).is_ok());
        assert!(
            validate_total_assets(&terms, Some(Decimal::from(MAX_REASONABLE_ASSETS)))
                .is_ok()
        );
    }

    #[test]
    fn test_actual_fee_required() {
        let err = validate_actual_fee(None, None, Decimal::from(50)).unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { .. }));
    }

    #[test]
    fn test_actual_fee_rejects_negative() {
        let err = validate_actual_fee(Some(dec("-100")), None, Decimal::from(50))
            .unwrap_err();
        assert!(matches!(err, ValidationError::NegativeAmount { .. }));
    }

    #[test]
    fn test_actual_fee_flags_high_deviation() {
        // 60% off a $1000 expected fee → confirm with the user
        let check =
            validate_actual_fee(Some(dec("400")), Some(dec("1000")), Decimal::from(50))
                .unwrap();
        match check {
            FeeEntryCheck::HighDeviation { percent } => {
                assert_eq!(percent, Decimal::from(60));
            }
            other => panic!("expected HighDeviation, got {:?}", other),
        }
    }

    #[test]
    fn test_actual_fee_deviation_bound_is_exclusive() {
        // Exactly 50% passes without remark
        let check =
            validate_actual_fee(Some(dec("500")), Some(dec("1000")), Decimal::from(50))
                .unwrap();
        assert_eq!(check, FeeEntryCheck::Accepted);
    }

    #[test]
    fn test_actual_fee_reasonable_deviation_accepted() {
        for actual in ["950", "1100"] {
            let check = validate_actual_fee(
                Some(dec(actual)),
                Some(dec("1000")),
                Decimal::from(50),
            )
            .unwrap();
            assert_eq!(check, FeeEntryCheck::Accepted);
        }
    }

    #[test]
    fn test_received_date_rejects_tomorrow() {
        let today = date(2025, 7, 13);
        let err = validate_received_date(date(2025, 7, 14), today, 30).unwrap_err();
        assert!(matches!(err, ValidationError::FutureDate { .. }));
    }

    #[test]
    fn test_received_date_flags_45_days_old() {
        let today = date(2025, 7, 13);
        let check = validate_received_date(date(2025, 5, 29), today, 30).unwrap();
        assert_eq!(check, FeeEntryCheck::StaleReceipt { days_old: 45 });
    }

    #[test]
    fn test_received_date_bound_is_exclusive() {
        let today = date(2025, 7, 13);
        // exactly 30 days back passes without remark
        let check = validate_received_date(date(2025, 6, 13), today, 30).unwrap();
        assert_eq!(check, FeeEntryCheck::Accepted);
        // today itself is fine
        let check = validate_received_date(today, today, 30).unwrap();
        assert_eq!(check, FeeEntryCheck::Accepted);
    }

    #[test]
    fn test_period_rejects_future_year() {
        let err = validate_applied_period(
            PaymentSchedule::Monthly,
            BillingPeriod { year: 2026, period: 1 },
            date(2025, 7, 13),
            2,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::FuturePeriod { .. }));
    }

    #[test]
    fn test_period_rejects_future_month() {
        let err = validate_applied_period(
            PaymentSchedule::Monthly,
            BillingPeriod { year: 2025, period: 8 },
            date(2025, 7, 13),
            2,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::FuturePeriod { .. }));
    }

    #[test]
    fn test_period_rejects_future_quarter() {
        let err = validate_applied_period(
            PaymentSchedule::Quarterly,
            BillingPeriod { year: 2025, period: 4 },
            date(2025, 7, 13), // Q3
            2,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::FuturePeriod { .. }));
    }

    #[test]
    fn test_period_rejects_stale() {
        let err = validate_applied_period(
            PaymentSchedule::Monthly,
            BillingPeriod { year: 2022, period: 1 },
            date(2025, 7, 13),
            2,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::StalePeriod { .. }));
    }

    #[test]
    fn test_period_accepts_valid() {
        for (year, period) in [(2025, 6), (2024, 12), (2023, 1)] {
            assert!(
                validate_applied_period(
                    PaymentSchedule::Monthly,
                    BillingPeriod { year, period },
                    date(2025, 7, 13),
                    2,
                )
                .is_ok(),
                "{year}-{period} should be valid"
            );
        }
    }

    #[test]
    fn test_combined_validation_order() {
        // Period failure wins over missing AUM
        let terms = FeeTerms::percentage(dec("0.0007"));
        let err = validate_payment_input(
            &terms,
            PaymentSchedule::Monthly,
            BillingPeriod { year: 2026, period: 1 },
            date(2025, 7, 13),
            None,
            None,
            None,
            date(2025, 7, 13),
            Decimal::from(50),
            2,
            30,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::FuturePeriod { .. }));
    }

    #[test]
    fn test_combined_validation_future_date_is_hard_failure() {
        let terms = FeeTerms::flat(dec("500"));
        let err = validate_payment_input(
            &terms,
            PaymentSchedule::Monthly,
            BillingPeriod { year: 2025, period: 6 },
            date(2025, 7, 14), // tomorrow
            None,
            Some(dec("500")),
            Some(dec("500")),
            date(2025, 7, 13),
            Decimal::from(50),
            2,
            30,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::FutureDate { .. }));
    }

    #[test]
    fn test_combined_validation_stale_date_flagged_first() {
        // Both soft flags fire; the received-date one comes first in form order
        let terms = FeeTerms::flat(dec("1000"));
        let check = validate_payment_input(
            &terms,
            PaymentSchedule::Monthly,
            BillingPeriod { year: 2025, period: 5 },
            date(2025, 5, 29), // 45 days old
            None,
            Some(dec("400")), // 60% off expected
            Some(dec("1000")),
            date(2025, 7, 13),
            Decimal::from(50),
            2,
            30,
        )
        .unwrap();
        assert_eq!(check, FeeEntryCheck::StaleReceipt { days_old: 45 });
    }

    #[test]
    fn test_combined_validation_accepts_complete_input() {
        let terms = FeeTerms::percentage(dec("0.0007"));
        let check = validate_payment_input(
            &terms,
            PaymentSchedule::Monthly,
            BillingPeriod { year: 2025, period: 6 },
            date(2025, 7, 13),
            Some(Decimal::from(1_000_000)),
            Some(dec("700")),
            Some(dec("700")),
            date(2025, 7, 13),
            Decimal::from(50),
            2,
            30,
        )
        .unwrap();
        assert_eq!(check, FeeEntryCheck::Accepted);
    }
}
