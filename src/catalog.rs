//! Static component catalog: inverter, battery, and panel reference data.
//!
//! All tables are immutable process-wide constants. Selection logic lives in
//! [`crate::sizing`]; this module only describes what is available.

use serde::Serialize;

/// A hybrid inverter model with a built-in MPPT charge controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Inverter {
    /// Rated continuous output power (W).
    pub watts: f32,
    /// DC bus voltage (V): 12, 24, or 48.
    pub voltage: u32,
    /// Built-in MPPT charge controller current rating (A).
    pub mppt_amps: u32,
    /// Maximum acceptable PV array input power (W).
    pub max_pv_input_w: f32,
}

/// Available inverter models, in ascending order of rated power.
///
/// Selection walks this table front to back, so ordering is load-bearing.
pub const INVERTERS: [Inverter; 6] = [
    Inverter {
        watts: 2000.0,
        voltage: 12,
        mppt_amps: 80,
        max_pv_input_w: 2000.0 * 1.2,
    },
    Inverter {
        watts: 3600.0,
        voltage: 24,
        mppt_amps: 120,
        max_pv_input_w: 3600.0 * 1.2,
    },
    Inverter {
        watts: 4200.0,
        voltage: 24,
        mppt_amps: 120,
        max_pv_input_w: 4200.0 * 1.2,
    },
    Inverter {
        watts: 6200.0,
        voltage: 48,
        mppt_amps: 120,
        max_pv_input_w: 6200.0 * 1.2,
    },
    Inverter {
        watts: 8200.0,
        voltage: 48,
        mppt_amps: 120,
        max_pv_input_w: 8200.0 * 1.2,
    },
    Inverter {
        watts: 10200.0,
        voltage: 48,
        mppt_amps: 120,
        max_pv_input_w: 10200.0 * 1.2,
    },
];

/// Deep-cycle tubular (lead-acid) battery unit used on 12 V systems.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TubularUnit {
    /// Nominal voltage (V).
    pub voltage: u32,
    /// Amp-hour rating at nominal voltage.
    pub amp_hours: f32,
    /// Usable energy capacity (kWh).
    pub kwh: f32,
}

/// The single tubular unit type stocked for 12 V systems.
pub const TUBULAR_UNIT: TubularUnit = TubularUnit {
    voltage: 12,
    amp_hours: 220.0,
    kwh: 2.64,
};

/// A lithium battery unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LithiumUnit {
    /// Nominal voltage (V).
    pub voltage: u32,
    /// Usable energy capacity (kWh).
    pub kwh: f32,
}

/// Available lithium units, ascending capacity within each voltage class.
pub const LITHIUM_UNITS: [LithiumUnit; 5] = [
    LithiumUnit {
        voltage: 24,
        kwh: 5.0,
    },
    LithiumUnit {
        voltage: 48,
        kwh: 5.0,
    },
    LithiumUnit {
        voltage: 48,
        kwh: 7.6,
    },
    LithiumUnit {
        voltage: 48,
        kwh: 10.0,
    },
    LithiumUnit {
        voltage: 48,
        kwh: 15.5,
    },
];

/// Returns the lithium units available at the given bus voltage, in
/// ascending capacity order.
pub fn lithium_units_at(voltage: u32) -> impl Iterator<Item = &'static LithiumUnit> {
    LITHIUM_UNITS.iter().filter(move |u| u.voltage == voltage)
}

/// A panel model and the system size it is recommended up to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelModel {
    /// Unit wattage (W).
    pub watts: f32,
    /// Largest total system capacity (kWp) this unit size is recommended for.
    pub max_system_kwp: f32,
}

/// Available panel sizes, ascending wattage.
pub const PANEL_MODELS: [PanelModel; 3] = [
    PanelModel {
        watts: 400.0,
        max_system_kwp: 2.4,
    },
    PanelModel {
        watts: 550.0,
        max_system_kwp: 6.0,
    },
    PanelModel {
        watts: 600.0,
        max_system_kwp: 10.2,
    },
];
