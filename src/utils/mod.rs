//! Utility functions and helpers.
//!
//! This module contains small formatting helpers shared by the project
//! operations, such as timestamp rendering and relative ages.

pub mod age;
pub mod time;

pub use age::relative_age;
pub use time::{elapsed_seconds, to_iso8601};
