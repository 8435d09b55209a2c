//! Analytics record sent once per generated estimate

use crate::enums::{OrganizationCategory, ServiceTier};
use crate::shared::duration::EventDuration;
use crate::shared::errors::AnalyticsDeliveryFailure;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Snapshot of a successful estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRecord {
    pub org_type: OrganizationCategory,
    pub service_type: ServiceTier,
    pub attendees: u32,
    /// Hours
    #[serde(with = "rust_decimal::serde::float")]
    pub duration: Decimal,
    /// Present only when the widget asked for it
    pub company_name: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub estimated_cost: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordRejected {
    #[error("attendee count must be positive")]
    ZeroAttendees,

    #[error("duration {0} is not one of the offered options")]
    DurationOffStep(Decimal),

    #[error("estimated cost {0} is negative")]
    NegativeCost(Decimal),
}

impl EstimateRecord {
    /// Rejects records no estimate form can produce
    pub fn check(&self) -> Result<(), RecordRejected> {
        if self.attendees == 0 {
            return Err(RecordRejected::ZeroAttendees);
        }
        if EventDuration::from_hours(self.duration).is_none() {
            return Err(RecordRejected::DurationOffStep(self.duration));
        }
        if self.estimated_cost.is_sign_negative() {
            return Err(RecordRejected::NegativeCost(self.estimated_cost));
        }
        Ok(())
    }
}

/// Body of `POST /api/track-calculation`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackCalculationRequest {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub record: EstimateRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Receiver of estimate records. Must return quickly; slow delivery belongs
/// in a background task of the implementation.
pub trait AnalyticsSink {
    fn track(&self, record: &EstimateRecord) -> Result<(), AnalyticsDeliveryFailure>;
}

/// Sink that only writes the record to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAnalytics;

impl AnalyticsSink for LogAnalytics {
    fn track(&self, record: &EstimateRecord) -> Result<(), AnalyticsDeliveryFailure> {
        log::info!("Tracking calculation: {:?}", record);
        Ok(())
    }
}
