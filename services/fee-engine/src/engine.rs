//! Fee engine — orchestrator
//!
//! Ties together expected-fee computation, variance classification,
//! input validation, compliance status, and review event emission
//! behind a single configurable entry point.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use plan_types::contract::FeeTerms;
use plan_types::errors::{FeeError, ValidationError};
use plan_types::ids::ClientId;
use plan_types::payment::Payment;
use plan_types::period::{BillingPeriod, PaymentSchedule};
use plan_types::variance::VarianceResult;

use crate::compliance::{self, PaymentStatus};
use crate::events::{self, VarianceEvent};
use crate::fees;
use crate::validation::{self, FeeEntryCheck};
use crate::variance::{self, VarianceThresholds};

/// Fee engine configuration
#[derive(Debug, Clone)]
pub struct FeeEngineConfig {
    /// Variance classification thresholds
    pub thresholds: VarianceThresholds,
    /// Deviation (percent) above which a fee entry asks for confirmation
    pub entry_warning_percent: Decimal,
    /// Oldest billing period accepted on entry, in years
    pub max_period_age_years: i32,
    /// Received dates older than this many days are flagged on entry
    pub stale_receipt_days: i64,
}

impl Default for FeeEngineConfig {
    fn default() -> Self {
        Self {
            thresholds: VarianceThresholds::default(),
            entry_warning_percent: Decimal::from(50),
            max_period_age_years: 2,
            stale_receipt_days: 30,
        }
    }
}

/// Fee & variance engine service
#[derive(Debug, Clone, Default)]
pub struct FeeEngine {
    config: FeeEngineConfig,
}

impl FeeEngine {
    /// Create an engine with default configuration
    pub fn new() -> Self {
        Self {
            config: FeeEngineConfig::default(),
        }
    }

    /// Create an engine with custom configuration
    pub fn with_config(config: FeeEngineConfig) -> Self {
        Self { config }
    }

    /// Expected periodic fee for a contract's terms and AUM snapshot.
    pub fn expected_fee(
        &self,
        terms: &FeeTerms,
        total_assets: Option<Decimal>,
    ) -> Result<Decimal, FeeError> {
        fees::expected_fee(terms, total_assets)
    }

    /// Classify a payment's variance and emit any review events.
    ///
    /// Warning and Alert classifications are also logged; `timestamp` is
    /// passed in so callers control the event clock.
    pub fn evaluate_payment(
        &self,
        payment: &Payment,
        timestamp: DateTime<Utc>,
    ) -> (VarianceResult, Vec<VarianceEvent>) {
        let result = variance::evaluate(
            payment.expected_fee,
            payment.actual_fee,
            &self.config.thresholds,
        );

        if result.status.is_review_required() {
            warn!(
                payment_id = %payment.payment_id,
                client_id = %payment.client_id,
                status = %result.status,
                variance_amount = %result.variance_amount,
                "payment variance requires review"
            );
        } else {
            debug!(
                payment_id = %payment.payment_id,
                status = %result.status,
                "payment variance classified"
            );
        }

        let review_events = events::events_for_result(
            payment.payment_id,
            payment.client_id,
            &result,
            timestamp,
        );

        (result, review_events)
    }

    /// Classify a bare (expected, actual) pair without a payment record.
    pub fn evaluate_fees(&self, expected: Decimal, actual: Decimal) -> VarianceResult {
        variance::evaluate(expected, actual, &self.config.thresholds)
    }

    /// Run all entry checks for a new payment.
    #[allow(clippy::too_many_arguments)]
    pub fn validate_input(
        &self,
        terms: &FeeTerms,
        schedule: PaymentSchedule,
        period: BillingPeriod,
        received_date: NaiveDate,
        total_assets: Option<Decimal>,
        actual_fee: Option<Decimal>,
        expected_fee: Option<Decimal>,
        today: NaiveDate,
    ) -> Result<FeeEntryCheck, ValidationError> {
        validation::validate_payment_input(
            terms,
            schedule,
            period,
            received_date,
            total_assets,
            actual_fee,
            expected_fee,
            today,
            self.config.entry_warning_percent,
            self.config.max_period_age_years,
            self.config.stale_receipt_days,
        )
    }

    /// Paid/Due status for a contract given its latest applied period.
    pub fn payment_status(
        &self,
        schedule: PaymentSchedule,
        last_payment_period: Option<BillingPeriod>,
        today: NaiveDate,
    ) -> PaymentStatus {
        compliance::payment_status(schedule, last_payment_period, today)
    }

    /// Review-queue summary for a set of evaluated payments: the highest
    /// severity seen for each client.
    pub fn review_summary(
        &self,
        results: &[(ClientId, VarianceResult)],
    ) -> Vec<(ClientId, VarianceResult)> {
        let mut worst: Vec<(ClientId, VarianceResult)> = Vec::new();
        for (client_id, result) in results {
            if !result.status.is_review_required() {
                continue;
            }
            match worst.iter_mut().find(|(id, _)| id == client_id) {
                Some((_, existing)) if existing.status >= result.status => {}
                Some(entry) => entry.1 = result.clone(),
                None => worst.push((*client_id, result.clone())),
            }
        }
        worst
    }
}
