//! Sizing policy flags and fixed engineering constants.
//!
//! The constants are deliberate policy values, not tunables; the flags cover
//! the few behaviors where field practice genuinely differs.

use serde::Deserialize;

/// Derating applied to nameplate solar yield for system losses,
/// temperature, and soiling.
pub const DERATING_FACTOR: f32 = 0.75;

/// Largest supported PV array (W).
pub const ARRAY_CEILING_W: f32 = 12_600.0;

/// Daily energy is assumed drawn over a 4-hour-equivalent duty cycle when
/// estimating peak draw.
pub const PEAK_DUTY_HOURS: f32 = 4.0;

/// Surge margin on the estimated peak draw.
pub const PEAK_SURGE_FACTOR: f32 = 1.5;

/// Oversizing margin on battery storage.
pub const BATTERY_BUFFER_FACTOR: f32 = 1.3;

/// Round-trip efficiency divisor applied when
/// [`SizingPolicy::apply_battery_efficiency`] is set.
pub const BATTERY_EFFICIENCY: f32 = 0.85;

/// Parallel battery strings beyond this count draw an advisory.
pub const BATTERY_PARALLEL_ADVISORY: u32 = 4;

/// NEC-style safety margin on the DC side.
pub const DC_SAFETY_MARGIN: f32 = 1.25;

/// Safety margin on the AC side.
pub const AC_SAFETY_MARGIN: f32 = 1.1;

/// Nominal AC output voltage (V).
pub const AC_NOMINAL_VOLTS: f32 = 230.0;

/// Inverters rated at or above this benefit from an automatic voltage
/// regulator on the input side.
pub const AVR_THRESHOLD_W: f32 = 5000.0;

/// Operational bounds on daily energy demand (kWh/day).
pub const DEMAND_BOUNDS_KWH: (f32, f32) = (0.1, 100.0);

/// Operational bounds on backup duration (hours).
pub const BACKUP_BOUNDS_HOURS: (f32, f32) = (8.0, 24.0);

/// What to do when no catalog inverter satisfies both selection criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InverterFallback {
    /// Surface a catalog-exhausted error.
    Fail,
    /// Substitute the entry closest in rated power and attach an advisory.
    ClosestMatch,
}

/// Selection behaviors that vary between deployments.
///
/// Defaults: non-strict ceiling (flag the result instead of failing),
/// closest-match inverter substitution, and the conservative battery
/// sizing that accounts for round-trip efficiency.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SizingPolicy {
    /// Treat an over-ceiling array as a hard error instead of a flag.
    pub strict_ceiling: bool,
    /// Behavior when the inverter search exhausts the catalog.
    pub inverter_fallback: InverterFallback,
    /// Divide battery energy by round-trip efficiency (0.85).
    pub apply_battery_efficiency: bool,
}

impl Default for SizingPolicy {
    fn default() -> Self {
        Self {
            strict_ceiling: false,
            inverter_fallback: InverterFallback::ClosestMatch,
            apply_battery_efficiency: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy() {
        let p = SizingPolicy::default();
        assert!(!p.strict_ceiling);
        assert_eq!(p.inverter_fallback, InverterFallback::ClosestMatch);
        assert!(p.apply_battery_efficiency);
    }

    #[test]
    fn fallback_deserializes_kebab_case() {
        #[derive(Deserialize)]
        struct Holder {
            fallback: InverterFallback,
        }
        let h: Holder = toml::from_str("fallback = \"closest-match\"").expect("parses");
        assert_eq!(h.fallback, InverterFallback::ClosestMatch);
        let h: Holder = toml::from_str("fallback = \"fail\"").expect("parses");
        assert_eq!(h.fallback, InverterFallback::Fail);
    }
}
