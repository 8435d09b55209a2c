use crate::enums::{OrganizationCategory, ServiceTier};
use crate::shared::errors::ConfigurationError;
use rust_decimal::Decimal;
use serde::Serialize;

/// Prices for one (tier, category) pair, in dollars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateEntry {
    /// Flat charge per hour
    pub base_rate: Decimal,
    /// Charge per attendee per hour
    pub per_person: Decimal,
    /// Floor for the final estimate
    pub minimum: Decimal,
}

impl RateEntry {
    pub fn new(base_rate: Decimal, per_person: Decimal, minimum: Decimal) -> Self {
        Self {
            base_rate,
            per_person,
            minimum,
        }
    }

    /// Entry without a base rate, for per-person-only pricing
    pub fn per_person_only(per_person: Decimal, minimum: Decimal) -> Self {
        Self::new(Decimal::ZERO, per_person, minimum)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateRow {
    pub tier: ServiceTier,
    pub category: OrganizationCategory,
    pub entry: RateEntry,
}

/// Immutable rate table keyed by (tier, category)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    rows: Vec<RateRow>,
}

impl RateTable {
    pub fn new(rows: Vec<(ServiceTier, OrganizationCategory, RateEntry)>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|(tier, category, entry)| RateRow {
                    tier,
                    category,
                    entry,
                })
                .collect(),
        }
    }

    pub fn lookup(
        &self,
        tier: ServiceTier,
        category: OrganizationCategory,
    ) -> Result<&RateEntry, ConfigurationError> {
        self.rows
            .iter()
            .find(|row| row.tier == tier && row.category == category)
            .map(|row| &row.entry)
            .ok_or(ConfigurationError::MissingRate { tier, category })
    }

    pub fn rows(&self) -> &[RateRow] {
        &self.rows
    }
}
