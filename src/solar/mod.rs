//! Solar yield inputs: monthly irradiance series and regional fallbacks.

/// Monthly yield series and the worst-month reduction.
pub mod irradiance;
/// Latitude-band regions and their estimated yield series.
pub mod region;

pub use irradiance::MonthlyYield;
pub use irradiance::worst_month_daily_yield;
pub use region::Region;
