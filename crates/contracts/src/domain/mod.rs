pub mod a001_pricing;
pub mod a002_estimate_form;
