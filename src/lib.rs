//! Off-grid/hybrid solar power system sizing.

#[cfg(feature = "api")]
pub mod api;
pub mod catalog;
pub mod config;
/// Appliance model, demand aggregation, and the built-in appliance library.
pub mod demand;
pub mod io;
/// Irradiance series reduction and regional fallback data.
pub mod solar;
/// Component selection pipeline, policy knobs, and the resulting design.
pub mod sizing;
