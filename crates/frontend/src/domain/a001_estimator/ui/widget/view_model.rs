use super::model::HttpAnalytics;
use contracts::domain::a001_pricing::WidgetVariant;
use contracts::domain::a002_estimate_form::{EstimateForm, SettleTicket, SETTLE_DELAY_MS};
use contracts::enums::{OrganizationCategory, ServiceTier};
use contracts::shared::duration::EventDuration;
use contracts::shared::errors::EstimateError;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// ViewModel for the estimator widget
///
/// All edits go through [`EstimatorViewModel::edit`], which also cancels a
/// pending settle timer.
#[derive(Clone, Copy)]
pub struct EstimatorViewModel {
    pub form: RwSignal<EstimateForm>,
    analytics: StoredValue<HttpAnalytics>,
    /// Dropping the handle cancels the timer
    settle_timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl EstimatorViewModel {
    pub fn new(variant: WidgetVariant, analytics: HttpAnalytics) -> Self {
        Self {
            form: RwSignal::new(EstimateForm::new(variant)),
            analytics: StoredValue::new(analytics),
            settle_timer: StoredValue::new_local(None),
        }
    }

    fn edit(&self, apply: impl FnOnce(&mut EstimateForm) -> bool) {
        let mut changed = false;
        self.form.update(|form| changed = apply(form));
        if changed {
            self.settle_timer.set_value(None);
        }
    }

    pub fn select_category(&self, code: &str) {
        match OrganizationCategory::from_code(code) {
            Some(category) => self.edit(|form| form.set_category(category)),
            None => log::warn!("unknown organization category: {}", code),
        }
    }

    pub fn select_tier(&self, code: &str) {
        match ServiceTier::from_code(code) {
            Some(tier) => self.edit(|form| form.set_tier(tier)),
            None => log::warn!("unknown service tier: {}", code),
        }
    }

    pub fn set_attendees_input(&self, raw: &str) {
        self.edit(|form| form.set_attendees_input(raw));
    }

    pub fn set_duration_code(&self, code: &str) {
        match EventDuration::from_code(code) {
            Some(duration) => self.edit(|form| form.set_duration(duration)),
            None => log::warn!("duration {:?} is not an offered option", code),
        }
    }

    pub fn set_company_name(&self, value: String) {
        self.edit(|form| form.set_company_name(value));
    }

    /// Generate command. An invalid form changes nothing; the guidance text is
    /// already on screen.
    pub fn generate(&self) {
        let analytics = self.analytics.get_value();
        let mut outcome = None;
        self.form.update(|form| outcome = Some(form.generate(&analytics)));

        match outcome {
            Some(Ok(ticket)) => self.schedule_settle(ticket),
            Some(Err(EstimateError::Validation(reason))) => {
                log::debug!("estimate not generated: {}", reason)
            }
            Some(Err(EstimateError::Configuration(e))) => log::error!("{}", e),
            None => {}
        }
    }

    fn schedule_settle(&self, ticket: SettleTicket) {
        let form = self.form;
        let timer = Timeout::new(SETTLE_DELAY_MS, move || {
            form.try_update(|form| form.settle(ticket));
        });
        // Replacing the handle cancels any earlier timer
        self.settle_timer.set_value(Some(timer));
    }

    // ---- derived state for the view (tracked reads) ----

    /// Inline guidance while the form is not ready
    pub fn guidance(&self) -> Option<String> {
        self.form
            .with(|f| f.validate().err().map(|reason| reason.to_string()))
    }

    pub fn requires_company_name(&self) -> bool {
        self.form.with(|f| f.requires_company_name())
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| f.is_valid())
    }
}
