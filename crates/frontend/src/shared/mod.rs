pub mod api_utils;
pub mod components;
pub mod embed;
pub mod number_format;
pub mod query;
