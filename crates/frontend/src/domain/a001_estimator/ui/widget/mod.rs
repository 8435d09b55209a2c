//! Estimator Widget UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: analytics delivery
//! - view_model.rs: ViewModel around the estimate form state machine
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use model::HttpAnalytics;
pub use view::EstimatorWidget;
pub use view_model::EstimatorViewModel;
