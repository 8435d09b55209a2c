//! Error taxonomy of the estimator

use crate::domain::a001_pricing::WidgetVariant;
use crate::enums::{OrganizationCategory, ServiceTier};
use thiserror::Error;

/// Rate configuration doesn't cover a combination the UI can produce.
/// A programming defect; caught by the config tests, never expected at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("no rate configured for tier {tier} and category {category}")]
    MissingRate {
        tier: ServiceTier,
        category: OrganizationCategory,
    },

    #[error("category {category} is not offered by the {variant} widget")]
    CategoryNotOffered {
        category: OrganizationCategory,
        variant: WidgetVariant,
    },
}

/// Form isn't ready for an estimate. The message is the inline guidance text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("Please enter the number of attendees")]
    MissingAttendees,

    #[error("Please enter your company name")]
    MissingCompanyName,
}

/// Best-effort analytics call failed. Logged, never shown, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("analytics delivery failed: {0}")]
pub struct AnalyticsDeliveryFailure(pub String);

/// Why a "generate" request produced no estimate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
