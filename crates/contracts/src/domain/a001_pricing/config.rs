//! Per-deployment estimator configuration
//!
//! One pricing engine serves every widget deployment; each deployment only
//! narrows which categories are offered, which formula applies, when a company
//! name is required and which rates it prices from.

use super::rate_table::{RateEntry, RateTable};
use crate::enums::{OrganizationCategory, ServiceTier};
use crate::shared::errors::ConfigurationError;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Widget deployments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetVariant {
    /// All three organization categories with a selector
    Combined,
    /// GitHub & Microsoft internal events only
    GithubInternal,
    /// Partner-sponsored events, per-person pricing
    ExternalPartner,
}

impl WidgetVariant {
    pub fn code(&self) -> &'static str {
        match self {
            WidgetVariant::Combined => "combined",
            WidgetVariant::GithubInternal => "githubInternal",
            WidgetVariant::ExternalPartner => "externalPartner",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "combined" => Some(WidgetVariant::Combined),
            "githubInternal" => Some(WidgetVariant::GithubInternal),
            "externalPartner" => Some(WidgetVariant::ExternalPartner),
            _ => None,
        }
    }

    pub fn all() -> Vec<WidgetVariant> {
        vec![
            WidgetVariant::Combined,
            WidgetVariant::GithubInternal,
            WidgetVariant::ExternalPartner,
        ]
    }

    pub fn config(&self) -> &'static EstimatorConfig {
        match self {
            WidgetVariant::Combined => &COMBINED,
            WidgetVariant::GithubInternal => &GITHUB_INTERNAL,
            WidgetVariant::ExternalPartner => &EXTERNAL_PARTNER,
        }
    }
}

impl std::fmt::Display for WidgetVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryChoice {
    Selectable {
        options: Vec<OrganizationCategory>,
        default: OrganizationCategory,
    },
    /// No selector; every estimate uses this category
    Fixed(OrganizationCategory),
}

impl CategoryChoice {
    pub fn offered(&self) -> Vec<OrganizationCategory> {
        match self {
            CategoryChoice::Selectable { options, .. } => options.clone(),
            CategoryChoice::Fixed(category) => vec![*category],
        }
    }

    pub fn offers(&self, category: OrganizationCategory) -> bool {
        match self {
            CategoryChoice::Selectable { options, .. } => options.contains(&category),
            CategoryChoice::Fixed(fixed) => *fixed == category,
        }
    }

    pub fn default_category(&self) -> OrganizationCategory {
        match self {
            CategoryChoice::Selectable { default, .. } => *default,
            CategoryChoice::Fixed(category) => *category,
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, CategoryChoice::Selectable { options, .. } if options.len() > 1)
    }
}

/// Raw cost expression before rounding and the minimum floor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingFormula {
    /// `base_rate * hours + per_person * attendees * hours`
    BaseAndPerPerson,
    /// `per_person * attendees * hours`
    PerPersonOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyNameRule {
    Never,
    ForCategories(Vec<OrganizationCategory>),
    Always,
}

impl CompanyNameRule {
    pub fn applies_to(&self, category: OrganizationCategory) -> bool {
        match self {
            CompanyNameRule::Never => false,
            CompanyNameRule::ForCategories(categories) => categories.contains(&category),
            CompanyNameRule::Always => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatorConfig {
    pub variant: WidgetVariant,
    pub categories: CategoryChoice,
    pub formula: PricingFormula,
    pub company_name: CompanyNameRule,
    pub rates: RateTable,
}

impl EstimatorConfig {
    /// Every (tier, category) pair the widget lets a user pick
    pub fn exposed_pairs(&self) -> Vec<(ServiceTier, OrganizationCategory)> {
        let categories = self.categories.offered();
        ServiceTier::all()
            .into_iter()
            .flat_map(|tier| categories.iter().map(move |category| (tier, *category)))
            .collect()
    }

    /// Checks the rate table covers every exposed pair
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (tier, category) in self.exposed_pairs() {
            self.rates.lookup(tier, category)?;
        }
        Ok(())
    }

    pub fn requires_company_name(&self, category: OrganizationCategory) -> bool {
        self.company_name.applies_to(category)
    }

    pub fn rate(
        &self,
        tier: ServiceTier,
        category: OrganizationCategory,
    ) -> Result<&RateEntry, ConfigurationError> {
        if !self.categories.offers(category) {
            return Err(ConfigurationError::CategoryNotOffered {
                category,
                variant: self.variant,
            });
        }
        self.rates.lookup(tier, category)
    }
}

fn usd(amount: i64) -> Decimal {
    Decimal::from(amount)
}

fn full_rates() -> Vec<(ServiceTier, OrganizationCategory, RateEntry)> {
    use OrganizationCategory::*;
    use ServiceTier::*;

    vec![
        (FullBar, GithubInternal, RateEntry::new(usd(75), usd(8), usd(800))),
        (FullBar, ExternalSponsor, RateEntry::new(usd(95), usd(10), usd(900))),
        (FullBar, NonProfit, RateEntry::new(usd(55), usd(6), usd(800))),
        (BeerWine, GithubInternal, RateEntry::new(usd(45), usd(5), usd(600))),
        (
            BeerWine,
            ExternalSponsor,
            RateEntry::new(usd(60), Decimal::new(65, 1), usd(800)),
        ),
        (BeerWine, NonProfit, RateEntry::new(usd(35), usd(4), usd(600))),
    ]
}

static COMBINED: Lazy<EstimatorConfig> = Lazy::new(|| EstimatorConfig {
    variant: WidgetVariant::Combined,
    categories: CategoryChoice::Selectable {
        options: OrganizationCategory::all(),
        default: OrganizationCategory::GithubInternal,
    },
    formula: PricingFormula::BaseAndPerPerson,
    company_name: CompanyNameRule::ForCategories(vec![
        OrganizationCategory::ExternalSponsor,
        OrganizationCategory::NonProfit,
    ]),
    rates: RateTable::new(full_rates()),
});

static GITHUB_INTERNAL: Lazy<EstimatorConfig> = Lazy::new(|| EstimatorConfig {
    variant: WidgetVariant::GithubInternal,
    categories: CategoryChoice::Fixed(OrganizationCategory::GithubInternal),
    formula: PricingFormula::BaseAndPerPerson,
    company_name: CompanyNameRule::Never,
    rates: RateTable::new(
        full_rates()
            .into_iter()
            .filter(|(_, category, _)| *category == OrganizationCategory::GithubInternal)
            .collect(),
    ),
});

// Partner pricing has its own per-person rates, keyed by tier only.
static EXTERNAL_PARTNER: Lazy<EstimatorConfig> = Lazy::new(|| EstimatorConfig {
    variant: WidgetVariant::ExternalPartner,
    categories: CategoryChoice::Fixed(OrganizationCategory::ExternalSponsor),
    formula: PricingFormula::PerPersonOnly,
    company_name: CompanyNameRule::Always,
    rates: RateTable::new(vec![
        (
            ServiceTier::FullBar,
            OrganizationCategory::ExternalSponsor,
            RateEntry::per_person_only(usd(10), usd(900)),
        ),
        (
            ServiceTier::BeerWine,
            OrganizationCategory::ExternalSponsor,
            RateEntry::per_person_only(usd(8), usd(800)),
        ),
    ]),
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_covers_its_exposed_pairs() {
        for variant in WidgetVariant::all() {
            let config = variant.config();
            assert_eq!(config.variant, variant);
            assert_eq!(config.validate(), Ok(()), "{variant}");
        }
    }

    #[test]
    fn test_exposed_pairs() {
        assert_eq!(WidgetVariant::Combined.config().exposed_pairs().len(), 6);
        assert_eq!(WidgetVariant::GithubInternal.config().exposed_pairs().len(), 2);
        assert_eq!(
            WidgetVariant::ExternalPartner.config().exposed_pairs(),
            vec![
                (ServiceTier::BeerWine, OrganizationCategory::ExternalSponsor),
                (ServiceTier::FullBar, OrganizationCategory::ExternalSponsor),
            ]
        );
    }

    #[test]
    fn test_company_name_rules() {
        let combined = WidgetVariant::Combined.config();
        assert!(!combined.requires_company_name(OrganizationCategory::GithubInternal));
        assert!(combined.requires_company_name(OrganizationCategory::ExternalSponsor));
        assert!(combined.requires_company_name(OrganizationCategory::NonProfit));

        let partner = WidgetVariant::ExternalPartner.config();
        assert!(partner.requires_company_name(OrganizationCategory::ExternalSponsor));

        let internal = WidgetVariant::GithubInternal.config();
        assert!(!internal.requires_company_name(OrganizationCategory::GithubInternal));
    }

    #[test]
    fn test_rate_rejects_category_outside_variant() {
        let partner = WidgetVariant::ExternalPartner.config();
        assert_eq!(
            partner.rate(ServiceTier::FullBar, OrganizationCategory::NonProfit),
            Err(ConfigurationError::CategoryNotOffered {
                category: OrganizationCategory::NonProfit,
                variant: WidgetVariant::ExternalPartner,
            })
        );
        assert!(!partner.categories.is_selectable());
        assert!(WidgetVariant::Combined.config().categories.is_selectable());
    }

    #[test]
    fn test_variant_codes() {
        for variant in WidgetVariant::all() {
            assert_eq!(WidgetVariant::from_code(variant.code()), Some(variant));
        }
    }
}
