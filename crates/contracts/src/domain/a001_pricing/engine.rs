use super::config::{EstimatorConfig, PricingFormula};
use super::rate_table::RateEntry;
use crate::enums::{OrganizationCategory, ServiceTier};
use crate::shared::duration::EventDuration;
use crate::shared::errors::ConfigurationError;
use rust_decimal::{Decimal, RoundingStrategy};

/// Cost before rounding and the minimum floor
pub fn raw_cost(
    formula: PricingFormula,
    entry: &RateEntry,
    attendees: u32,
    duration: EventDuration,
) -> Decimal {
    let hours = duration.hours();
    let attendee_cost = entry.per_person * Decimal::from(attendees) * hours;
    match formula {
        PricingFormula::BaseAndPerPerson => entry.base_rate * hours + attendee_cost,
        PricingFormula::PerPersonOnly => attendee_cost,
    }
}

/// Rounds to whole dollars, halves go up
pub fn round_to_dollars(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Estimated cost in whole dollars, never below the pair's minimum.
///
/// Callers validate the form first; `attendees == 0` still prices (to the
/// minimum) but the form never asks for it.
pub fn estimate_cost(
    config: &EstimatorConfig,
    category: OrganizationCategory,
    tier: ServiceTier,
    attendees: u32,
    duration: EventDuration,
) -> Result<Decimal, ConfigurationError> {
    let entry = config.rate(tier, category)?;
    let rounded = round_to_dollars(raw_cost(config.formula, entry, attendees, duration));
    Ok(rounded.max(entry.minimum))
}
