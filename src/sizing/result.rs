//! The sizing output: an immutable bill of electrical components.

use std::fmt;

use serde::Serialize;

/// Battery chemistry of the selected bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Chemistry {
    Tubular,
    Lithium,
}

impl fmt::Display for Chemistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chemistry::Tubular => write!(f, "Tubular"),
            Chemistry::Lithium => write!(f, "Lithium"),
        }
    }
}

/// Battery bank configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatteryBank {
    /// Unit chemistry.
    pub chemistry: Chemistry,
    /// Per-unit amp-hour-equivalent capacity at the bus voltage.
    pub unit_amp_hours: f32,
    /// Units in series per string.
    pub series: u32,
    /// Parallel strings.
    pub parallel: u32,
    /// Total units (`series × parallel`).
    pub total_units: u32,
}

/// Panel array configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelArray {
    /// Unit wattage of the selected panel model.
    pub unit_watts: f32,
    /// Number of panels.
    pub count: u32,
    /// Total array wattage (`count × unit_watts`).
    pub total_watts: f32,
}

/// Charge controller bundled with the inverter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChargeController {
    /// Controller technology.
    pub kind: &'static str,
    /// Current rating (A).
    pub amps: u32,
    /// Number of controllers.
    pub count: u32,
}

/// Selected cable cross-sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CableSizes {
    /// DC run cross-section (mm²).
    pub dc_mm2: u32,
    /// AC run cross-section (mm²).
    pub ac_mm2: u32,
}

/// Selected breaker ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakerRatings {
    /// DC breaker rating (A).
    pub dc_amps: u32,
    /// AC breaker rating (A).
    pub ac_amps: u32,
}

/// Recommended protection accessories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Accessories {
    /// Surge protection device.
    pub surge_protector: bool,
    /// Automatic voltage regulator.
    pub voltage_regulator: bool,
}

/// Non-blocking observations attached to a design. Purely informational.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// Required array exceeds the supported ceiling.
    ArrayOverCeiling { required_w: f32, limit_w: f32 },
    /// No inverter met both criteria; the closest rating was substituted.
    InverterSubstituted { peak_needed_w: f32, rating_w: f32 },
    /// Battery bank needs an unusually high parallel string count.
    HighBatteryParallelCount { count: u32 },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::ArrayOverCeiling { required_w, limit_w } => write!(
                f,
                "required array ({required_w:.0} W) exceeds the {limit_w:.0} W recommended limit"
            ),
            Advisory::InverterSubstituted {
                peak_needed_w,
                rating_w,
            } => write!(
                f,
                "no inverter covers a {peak_needed_w:.0} W peak; \
                 substituted the closest {rating_w:.0} W model"
            ),
            Advisory::HighBatteryParallelCount { count } => write!(
                f,
                "{count} parallel battery strings reduce charge efficiency; \
                 consider a higher-voltage bus"
            ),
        }
    }
}

/// A complete sized system. Constructed once by the engine and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemDesign {
    /// DC bus voltage (V).
    pub system_voltage: u32,
    /// Inverter rated continuous power (W).
    pub inverter_watts: f32,
    /// Battery bank.
    pub battery: BatteryBank,
    /// Panel array.
    pub panels: PanelArray,
    /// Charge controller.
    pub charge_controller: ChargeController,
    /// Cable cross-sections.
    pub cables: CableSizes,
    /// Breaker ratings.
    pub breakers: BreakerRatings,
    /// Protection accessories.
    pub accessories: Accessories,
    /// Whether the required array exceeded the recommended ceiling.
    pub oversized: bool,
    /// Informational advisories gathered during selection.
    pub advisories: Vec<Advisory>,
}

impl fmt::Display for SystemDesign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- System Design ---")?;
        writeln!(f, "Bus voltage:        {} V", self.system_voltage)?;
        writeln!(f, "Inverter:           {:.0} W", self.inverter_watts)?;
        writeln!(
            f,
            "Battery bank:       {} × {} {:.0} Ah ({}S{}P)",
            self.battery.total_units,
            self.battery.chemistry,
            self.battery.unit_amp_hours,
            self.battery.series,
            self.battery.parallel,
        )?;
        writeln!(
            f,
            "Panel array:        {} × {:.0} W = {:.0} W",
            self.panels.count, self.panels.unit_watts, self.panels.total_watts
        )?;
        writeln!(
            f,
            "Charge controller:  {} {} A × {}",
            self.charge_controller.kind, self.charge_controller.amps, self.charge_controller.count
        )?;
        writeln!(
            f,
            "Cables:             DC {} mm², AC {} mm²",
            self.cables.dc_mm2, self.cables.ac_mm2
        )?;
        writeln!(
            f,
            "Breakers:           DC {} A, AC {} A",
            self.breakers.dc_amps, self.breakers.ac_amps
        )?;
        writeln!(
            f,
            "Surge protector:    {}",
            if self.accessories.surge_protector {
                "yes"
            } else {
                "no"
            }
        )?;
        write!(
            f,
            "Voltage regulator:  {}",
            if self.accessories.voltage_regulator {
                "yes"
            } else {
                "no"
            }
        )?;
        for advisory in &self.advisories {
            write!(f, "\nadvisory: {advisory}")?;
        }
        Ok(())
    }
}
