//! Load modeling: appliances, time-of-use windows, and demand aggregation.

/// Daily-energy reductions over a set of appliances.
pub mod aggregate;
/// Built-in appliance library with typical wattages and usage windows.
pub mod library;
/// Appliance and time-slot value types.
pub mod load;

pub use aggregate::DemandSummary;
pub use load::Appliance;
pub use load::SlotName;
pub use load::TimeSlot;
