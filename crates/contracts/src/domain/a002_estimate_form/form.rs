//! Estimate form state machine
//!
//! `Editing` until a valid form is generated, then `EstimateShown`. Any real
//! change to an input drops back to `Editing`. The one deferred effect, the
//! settle emphasis, is keyed to the epoch of the estimate that scheduled it,
//! so an edit in between invalidates it no matter when the timer fires.

use crate::domain::a001_pricing::{estimate_cost, EstimatorConfig, WidgetVariant};
use crate::enums::{OrganizationCategory, ServiceTier};
use crate::shared::analytics::{AnalyticsSink, EstimateRecord};
use crate::shared::duration::EventDuration;
use crate::shared::errors::{EstimateError, ValidationFailure};
use rust_decimal::Decimal;

/// Delay between showing an estimate and emphasising it
pub const SETTLE_DELAY_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    EstimateShown { cost: Decimal, settled: bool },
}

/// Permission to settle one particular estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTicket {
    epoch: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateForm {
    variant: WidgetVariant,
    category: OrganizationCategory,
    tier: ServiceTier,
    attendees: u32,
    duration: EventDuration,
    company_name: String,
    phase: FormPhase,
    epoch: u64,
}

impl EstimateForm {
    pub fn new(variant: WidgetVariant) -> Self {
        Self {
            variant,
            category: variant.config().categories.default_category(),
            tier: ServiceTier::default(),
            attendees: 0,
            duration: EventDuration::default(),
            company_name: String::new(),
            phase: FormPhase::Editing,
            epoch: 0,
        }
    }

    pub fn variant(&self) -> WidgetVariant {
        self.variant
    }

    pub fn config(&self) -> &'static EstimatorConfig {
        self.variant.config()
    }

    pub fn category(&self) -> OrganizationCategory {
        self.category
    }

    pub fn tier(&self) -> ServiceTier {
        self.tier
    }

    pub fn attendees(&self) -> u32 {
        self.attendees
    }

    pub fn duration(&self) -> EventDuration {
        self.duration
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn estimate(&self) -> Option<Decimal> {
        match self.phase {
            FormPhase::EstimateShown { cost, .. } => Some(cost),
            FormPhase::Editing => None,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.phase, FormPhase::EstimateShown { settled: true, .. })
    }

    // ---- edits ----

    /// Returns false when the category is unchanged or not offered
    pub fn set_category(&mut self, category: OrganizationCategory) -> bool {
        if !self.config().categories.offers(category) {
            log::warn!(
                "category {} is not offered by the {} widget",
                category,
                self.variant
            );
            return false;
        }
        self.apply(|form| &mut form.category, category)
    }

    pub fn set_tier(&mut self, tier: ServiceTier) -> bool {
        self.apply(|form| &mut form.tier, tier)
    }

    pub fn set_attendees(&mut self, attendees: u32) -> bool {
        self.apply(|form| &mut form.attendees, attendees)
    }

    /// Raw text from the attendee input; see [`parse_attendee_input`]
    pub fn set_attendees_input(&mut self, raw: &str) -> bool {
        self.set_attendees(parse_attendee_input(raw))
    }

    pub fn set_duration(&mut self, duration: EventDuration) -> bool {
        self.apply(|form| &mut form.duration, duration)
    }

    pub fn set_company_name(&mut self, company_name: impl Into<String>) -> bool {
        self.apply(|form| &mut form.company_name, company_name.into())
    }

    fn apply<T: PartialEq>(&mut self, field: impl FnOnce(&mut Self) -> &mut T, value: T) -> bool {
        let slot = field(self);
        if *slot == value {
            return false;
        }
        *slot = value;
        self.reset_estimate();
        true
    }

    /// Back to `Editing`; outstanding settle tickets become stale
    fn reset_estimate(&mut self) {
        self.phase = FormPhase::Editing;
        self.epoch += 1;
    }

    // ---- validity ----

    pub fn requires_company_name(&self) -> bool {
        self.config().requires_company_name(self.category)
    }

    pub fn validate(&self) -> Result<(), ValidationFailure> {
        if self.attendees == 0 {
            return Err(ValidationFailure::MissingAttendees);
        }
        if self.requires_company_name() && self.company_name.trim().is_empty() {
            return Err(ValidationFailure::MissingCompanyName);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    // ---- generate / settle ----

    /// Prices the current inputs and shows the estimate.
    ///
    /// An invalid form is left untouched. The record goes to `sink` after the
    /// state change; a delivery failure is logged and otherwise ignored.
    pub fn generate(&mut self, sink: &dyn AnalyticsSink) -> Result<SettleTicket, EstimateError> {
        self.validate()?;

        let cost = estimate_cost(
            self.config(),
            self.category,
            self.tier,
            self.attendees,
            self.duration,
        )?;

        self.epoch += 1;
        self.phase = FormPhase::EstimateShown {
            cost,
            settled: false,
        };

        if let Err(e) = sink.track(&self.record(cost)) {
            log::warn!("{}", e);
        }

        Ok(SettleTicket { epoch: self.epoch })
    }

    /// Sets the emphasis flag if `ticket` still belongs to the shown estimate
    pub fn settle(&mut self, ticket: SettleTicket) -> bool {
        if ticket.epoch != self.epoch {
            return false;
        }
        match &mut self.phase {
            FormPhase::EstimateShown { settled, .. } if !*settled => {
                *settled = true;
                true
            }
            _ => false,
        }
    }

    fn record(&self, cost: Decimal) -> EstimateRecord {
        let company_name = self
            .requires_company_name()
            .then(|| self.company_name.trim().to_string());
        EstimateRecord {
            org_type: self.category,
            service_type: self.tier,
            attendees: self.attendees,
            duration: self.duration.hours(),
            company_name,
            estimated_cost: cost,
        }
    }
}

/// Attendee count from free text: leading digits only, anything else is 0.
/// A leading minus clamps to 0.
pub fn parse_attendee_input(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if unsigned.starts_with('-') {
        return 0;
    }
    let digits: String = unsigned.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::LogAnalytics;
    use crate::shared::errors::AnalyticsDeliveryFailure;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        records: RefCell<Vec<EstimateRecord>>,
        fail: bool,
    }

    impl AnalyticsSink for RecordingSink {
        fn track(&self, record: &EstimateRecord) -> Result<(), AnalyticsDeliveryFailure> {
            self.records.borrow_mut().push(record.clone());
            if self.fail {
                Err(AnalyticsDeliveryFailure("offline".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn filled(variant: WidgetVariant) -> EstimateForm {
        let mut form = EstimateForm::new(variant);
        form.set_attendees(50);
        form.set_company_name("Octo Corp");
        form
    }

    #[test]
    fn test_defaults() {
        let form = EstimateForm::new(WidgetVariant::Combined);
        assert_eq!(form.category(), OrganizationCategory::GithubInternal);
        assert_eq!(form.tier(), ServiceTier::BeerWine);
        assert_eq!(form.attendees(), 0);
        assert_eq!(form.duration(), EventDuration::default());
        assert_eq!(form.phase(), FormPhase::Editing);

        let partner = EstimateForm::new(WidgetVariant::ExternalPartner);
        assert_eq!(partner.category(), OrganizationCategory::ExternalSponsor);
    }

    #[test]
    fn test_validity() {
        let mut form = EstimateForm::new(WidgetVariant::Combined);
        form.set_company_name("Octo Corp");
        assert_eq!(form.validate(), Err(ValidationFailure::MissingAttendees));

        form.set_company_name("");
        form.set_attendees(10);
        assert_eq!(form.validate(), Ok(()));

        form.set_category(OrganizationCategory::NonProfit);
        assert_eq!(form.validate(), Err(ValidationFailure::MissingCompanyName));
        form.set_company_name("   ");
        assert_eq!(form.validate(), Err(ValidationFailure::MissingCompanyName));
        form.set_company_name(" Food Bank ");
        assert!(form.is_valid());

        let mut partner = EstimateForm::new(WidgetVariant::ExternalPartner);
        partner.set_attendees(10);
        assert_eq!(partner.validate(), Err(ValidationFailure::MissingCompanyName));
    }

    #[test]
    fn test_invalid_generate_is_noop() {
        let sink = RecordingSink::default();
        let mut form = EstimateForm::new(WidgetVariant::Combined);
        let before = form.clone();

        let result = form.generate(&sink);

        assert_eq!(
            result,
            Err(EstimateError::Validation(ValidationFailure::MissingAttendees))
        );
        assert_eq!(form, before);
        assert!(sink.records.borrow().is_empty());
    }

    #[test]
    fn test_partner_zero_attendees_stays_invalid() {
        let mut form = EstimateForm::new(WidgetVariant::ExternalPartner);
        form.set_company_name("Octo Corp");
        assert!(form.generate(&LogAnalytics).is_err());
        assert_eq!(form.attendees(), 0);
        assert_eq!(form.estimate(), None);
    }

    #[test]
    fn test_generate_shows_estimate_and_tracks() {
        let sink = RecordingSink::default();
        let mut form = filled(WidgetVariant::Combined);

        assert!(form.generate(&sink).is_ok());

        assert_eq!(form.estimate(), Some(Decimal::from(600)));
        assert!(!form.is_settled());
        let records = sink.records.borrow();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].org_type, OrganizationCategory::GithubInternal);
        assert_eq!(records[0].company_name, None);
        assert_eq!(records[0].estimated_cost, Decimal::from(600));
    }

    #[test]
    fn test_record_carries_trimmed_company_name() {
        let sink = RecordingSink::default();
        let mut form = filled(WidgetVariant::Combined);
        form.set_category(OrganizationCategory::ExternalSponsor);
        form.set_company_name("  Octo Corp ");

        form.generate(&sink).unwrap();

        assert_eq!(
            sink.records.borrow()[0].company_name.as_deref(),
            Some("Octo Corp")
        );
    }

    #[test]
    fn test_analytics_failure_does_not_block() {
        let sink = RecordingSink {
            fail: true,
            ..Default::default()
        };
        let mut form = filled(WidgetVariant::ExternalPartner);

        assert!(form.generate(&sink).is_ok());
        assert_eq!(form.estimate(), Some(Decimal::from(800)));
    }

    #[test]
    fn test_regenerate_is_idempotent() {
        let mut form = filled(WidgetVariant::Combined);
        form.generate(&LogAnalytics).unwrap();
        let first = form.estimate();
        form.generate(&LogAnalytics).unwrap();
        assert_eq!(form.estimate(), first);
    }

    fn edit(form: &mut EstimateForm, field: &str) -> bool {
        match field {
            "category" => form.set_category(OrganizationCategory::NonProfit),
            "tier" => form.set_tier(ServiceTier::FullBar),
            "attendees" => form.set_attendees(51),
            "duration" => form.set_duration(EventDuration::from_half_hours(5).unwrap()),
            "company" => form.set_company_name("Other Corp"),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_every_edit_clears_estimate() {
        for field in ["category", "tier", "attendees", "duration", "company"] {
            let mut form = filled(WidgetVariant::Combined);
            let ticket = form.generate(&LogAnalytics).unwrap();
            assert!(form.settle(ticket));

            assert!(edit(&mut form, field), "{field}");
            assert_eq!(form.phase(), FormPhase::Editing, "{field}");
            assert!(!form.is_settled(), "{field}");
        }
    }

    #[test]
    fn test_unchanged_value_keeps_estimate() {
        let mut form = filled(WidgetVariant::Combined);
        form.generate(&LogAnalytics).unwrap();

        assert!(!form.set_attendees(50));
        assert!(!form.set_tier(ServiceTier::BeerWine));
        assert!(form.estimate().is_some());
    }

    #[test]
    fn test_settle_only_for_current_estimate() {
        let mut form = filled(WidgetVariant::Combined);
        let stale = form.generate(&LogAnalytics).unwrap();

        form.set_attendees(80);
        assert!(!form.settle(stale));
        assert_eq!(form.phase(), FormPhase::Editing);

        // A new estimate does not revive the old ticket either
        let fresh = form.generate(&LogAnalytics).unwrap();
        assert!(!form.settle(stale));
        assert!(!form.is_settled());
        assert!(form.settle(fresh));
        assert!(form.is_settled());
        assert!(!form.settle(fresh));
    }

    #[test]
    fn test_fixed_category_cannot_change() {
        let mut form = filled(WidgetVariant::GithubInternal);
        form.generate(&LogAnalytics).unwrap();

        assert!(!form.set_category(OrganizationCategory::NonProfit));
        assert_eq!(form.category(), OrganizationCategory::GithubInternal);
        assert!(form.estimate().is_some());
    }

    #[test]
    fn test_parse_attendee_input() {
        assert_eq!(parse_attendee_input(""), 0);
        assert_eq!(parse_attendee_input("abc"), 0);
        assert_eq!(parse_attendee_input("42"), 42);
        assert_eq!(parse_attendee_input(" 42 "), 42);
        assert_eq!(parse_attendee_input("12abc"), 12);
        assert_eq!(parse_attendee_input("3.7"), 3);
        assert_eq!(parse_attendee_input("-5"), 0);
        assert_eq!(parse_attendee_input("+7"), 7);
        assert_eq!(parse_attendee_input("99999999999"), u32::MAX);
    }
}
