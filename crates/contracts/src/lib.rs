//! Platform-neutral core of the event bar cost estimator.
//!
//! Shared by the browser widget and the server.

pub mod domain;
pub mod enums;
pub mod shared;
