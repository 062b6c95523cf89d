//! Daily-energy reductions over a set of appliances.
//!
//! Pure functions of their inputs: no error paths (malformed override
//! durations are clamped at config load, before they reach this module).

use std::fmt;

use serde::Serialize;

use super::load::{Appliance, SlotName, TimeSlot};

fn energy_kwh(
    items: &[Appliance],
    item_ok: impl Fn(&Appliance) -> bool,
    slot_ok: impl Fn(&TimeSlot) -> bool,
) -> f32 {
    items
        .iter()
        .filter(|a| a.selected && item_ok(a))
        .map(|a| {
            let hours: f32 = a
                .slots
                .iter()
                .filter(|s| s.active && slot_ok(s))
                .map(TimeSlot::effective_hours)
                .sum();
            a.watts * a.quantity as f32 * hours / 1000.0
        })
        .sum()
}

/// Total daily energy (kWh) of all selected appliances.
pub fn daily_energy_kwh(items: &[Appliance]) -> f32 {
    energy_kwh(items, |_| true, |_| true)
}

/// Daily energy (kWh) restricted to windows passing `slot_ok`.
pub fn energy_kwh_where(items: &[Appliance], slot_ok: impl Fn(&TimeSlot) -> bool) -> f32 {
    energy_kwh(items, |_| true, slot_ok)
}

/// Daily energy (kWh) of selected appliances also marked critical.
pub fn critical_energy_kwh(items: &[Appliance]) -> f32 {
    energy_kwh(items, |a| a.critical, |_| true)
}

/// Daily energy (kWh) consumed during the night window.
pub fn night_energy_kwh(items: &[Appliance]) -> f32 {
    energy_kwh(items, |_| true, |s| s.name == SlotName::Night)
}

/// Scalar demand figures derived from one appliance set.
#[derive(Debug, Clone, Serialize)]
pub struct DemandSummary {
    /// Total daily energy of all selected appliances (kWh).
    pub total_kwh: f32,
    /// Daily energy of the critical-load subset (kWh).
    pub critical_kwh: f32,
    /// Daily energy consumed during the night window (kWh).
    pub night_kwh: f32,
}

impl DemandSummary {
    /// Computes all three reductions in one pass over the appliance set.
    pub fn from_appliances(items: &[Appliance]) -> Self {
        Self {
            total_kwh: daily_energy_kwh(items),
            critical_kwh: critical_energy_kwh(items),
            night_kwh: night_energy_kwh(items),
        }
    }
}

impl fmt::Display for DemandSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Demand ---")?;
        writeln!(f, "Total daily load:    {:.2} kWh", self.total_kwh)?;
        writeln!(f, "Critical load:       {:.2} kWh", self.critical_kwh)?;
        write!(f, "Night load:          {:.2} kWh", self.night_kwh)
    }
}
