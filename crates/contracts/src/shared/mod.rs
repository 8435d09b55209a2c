pub mod analytics;
pub mod duration;
pub mod embed;
pub mod errors;
