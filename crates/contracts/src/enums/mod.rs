pub mod organization_category;
pub mod service_tier;

pub use organization_category::OrganizationCategory;
pub use service_tier::ServiceTier;
