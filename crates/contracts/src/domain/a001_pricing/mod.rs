pub mod config;
pub mod engine;
pub mod rate_table;

pub use config::{CategoryChoice, CompanyNameRule, EstimatorConfig, PricingFormula, WidgetVariant};
pub use engine::estimate_cost;
pub use rate_table::{RateEntry, RateTable};
