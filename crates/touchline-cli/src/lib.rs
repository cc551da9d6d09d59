//! CLI library components for the touchline loader.

pub mod logging;
pub mod summary;
