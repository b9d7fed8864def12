//! Variance review events
//!
//! Events emitted when a payment's variance status calls for operations
//! review. Exact and Acceptable classifications emit nothing.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use plan_types::ids::{ClientId, PaymentId};
use plan_types::variance::{VarianceResult, VarianceStatus};

/// Review event emitted by the fee engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarianceEvent {
    pub event_id: Uuid,
    pub payment_id: PaymentId,
    pub client_id: ClientId,
    pub event_type: VarianceEventType,
    pub variance_amount: Decimal,
    /// Absent when the expected fee was zero (percentage undefined)
    pub variance_percent: Option<Decimal>,
    pub timestamp: DateTime<Utc>,
}

/// Review event type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VarianceEventType {
    /// Variance within 15% but past the acceptable bound — review queue
    VarianceWarning,
    /// Variance past 15% (or undefined) — immediate review
    VarianceAlert,
}

impl VarianceEvent {
    /// Create a review event for a classified payment
    pub fn new(
        payment_id: PaymentId,
        client_id: ClientId,
        event_type: VarianceEventType,
        variance_amount: Decimal,
        variance_percent: Option<Decimal>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            payment_id,
            client_id,
            event_type,
            variance_amount,
            variance_percent,
            timestamp,
        }
    }
}

/// Generate review events for a variance result.
///
/// Returns at most one event: Warning and Alert statuses each map to a
/// single event, everything else to none.
pub fn events_for_result(
    payment_id: PaymentId,
    client_id: ClientId,
    result: &VarianceResult,
    timestamp: DateTime<Utc>,
) -> Vec<VarianceEvent> {
    let event_type = match result.status {
        VarianceStatus::Exact | VarianceStatus::Acceptable => return Vec::new(),
        VarianceStatus::Warning => VarianceEventType::VarianceWarning,
        VarianceStatus::Alert => VarianceEventType::VarianceAlert,
    };

    vec![VarianceEvent::new(
        payment_id,
        client_id,
        event_type,
        result.variance_amount,
        result.variance_percent,
        timestamp,
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_status(status: VarianceStatus) -> VarianceResult {
        VarianceResult {
            expected_fee: Decimal::from(100),
            actual_fee: Decimal::from(120),
            variance_amount: Decimal::from(20),
            variance_percent: Some(Decimal::from(20)),
            status,
        }
    }

    fn now() -> DateTime<Utc> {
        "2025-07-13T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_no_events_for_exact() {
        let events = events_for_result(
            PaymentId::new(),
            ClientId::new(),
            &result_with_status(VarianceStatus::Exact),
            now(),
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_no_events_for_acceptable() {
        let events = events_for_result(
            PaymentId::new(),
            ClientId::new(),
            &result_with_status(VarianceStatus::Acceptable),
            now(),
        );
        assert!(events.is_empty());
    }

    #[test]
    fn test_warning_event() {
        let events = events_for_result(
            PaymentId::new(),
            ClientId::new(),
            &result_with_status(VarianceStatus::Warning),
            now(),
        );
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, VarianceEventType::VarianceWarning);
        assert_eq!(events[0].variance_amount, Decimal::from(20));
    }

    #[test]
    fn test_alert_event() {
        let events = events_for_result(
            PaymentId::new(),
            ClientId::new(),
            &result_with_status(VarianceStatus::Alert),
            now(),
        );
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, VarianceEventType::VarianceAlert);
    }

    #[test]
    fn test_event_serializes_wire_shape() {
        let events = events_for_result(
            PaymentId::new(),
            ClientId::new(),
            &result_with_status(VarianceStatus::Warning),
            now(),
        );
        let json = serde_json::to_value(&events[0]).unwrap();
        assert_eq!(json["event_type"], "VarianceWarning");
        assert!(json["event_id"].is_string());
    }

    #[test]
    fn test_event_has_unique_id() {
        let payment_id = PaymentId::new();
        let client_id = ClientId::new();
        let result = result_with_status(VarianceStatus::Alert);
        let e1 = events_for_result(payment_id, client_id, &result, now());
        let e2 = events_for_result(payment_id, client_id, &result, now());
        assert_ne!(e1[0].event_id, e2[0].event_id);
    }
}
