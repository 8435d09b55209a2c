//! Event duration in half-hour steps and its display form

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// 1.0 hour
const MIN_HALF_HOURS: u8 = 2;
/// 6.0 hours
const MAX_HALF_HOURS: u8 = 12;
/// 2.0 hours
const DEFAULT_HALF_HOURS: u8 = 4;

/// Duration of an event, restricted to 1.0..=6.0 hours in 0.5 steps.
///
/// Stored as a count of half hours so that an off-step value can't be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventDuration(u8);

impl EventDuration {
    pub fn from_half_hours(steps: u8) -> Option<Self> {
        (MIN_HALF_HOURS..=MAX_HALF_HOURS)
            .contains(&steps)
            .then_some(Self(steps))
    }

    /// Accepts only values from the fixed step set
    pub fn from_hours(hours: Decimal) -> Option<Self> {
        let steps = hours * Decimal::TWO;
        if !steps.fract().is_zero() {
            return None;
        }
        steps.to_u8().and_then(Self::from_half_hours)
    }

    pub fn half_hours(&self) -> u8 {
        self.0
    }

    pub fn hours(&self) -> Decimal {
        Decimal::new(i64::from(self.0) * 5, 1).normalize()
    }

    /// All selectable durations, ascending
    pub fn options() -> impl Iterator<Item = EventDuration> {
        (MIN_HALF_HOURS..=MAX_HALF_HOURS).map(EventDuration)
    }

    /// Value used in the duration `<select>`: "1", "1.5", ... "6"
    pub fn code(&self) -> String {
        self.hours().to_string()
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Decimal::from_str(code.trim()).ok().and_then(Self::from_hours)
    }
}

impl Default for EventDuration {
    fn default() -> Self {
        Self(DEFAULT_HALF_HOURS)
    }
}

impl std::fmt::Display for EventDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_duration(self.hours()))
    }
}

/// Renders fractional hours as "2 hours", "1 hour 30 min" or "30 min".
///
/// Minutes are rounded half-up. The "hour" in the mixed form stays singular.
pub fn format_duration(hours: Decimal) -> String {
    let whole = hours.floor();
    let minutes = ((hours - whole) * Decimal::from(60))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    let whole = whole.to_i64().unwrap_or_default();
    let minutes = minutes.to_i64().unwrap_or_default();

    if minutes == 0 {
        if whole == 1 {
            "1 hour".to_string()
        } else {
            format!("{} hours", whole)
        }
    } else if whole == 0 {
        format!("{} min", minutes)
    } else {
        format!("{} hour {} min", whole, minutes)
    }
}
