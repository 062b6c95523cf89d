//! The component selection pipeline.
//!
//! A strict sequence with no backtracking: validate → required array →
//! ceiling check → inverter → panels → battery → protection → accessories.
//! Pure function of its inputs and the static catalog; either one complete
//! [`SystemDesign`] comes back or a [`SizingError`] before any partial state
//! exists.

use crate::catalog::{self, INVERTERS, Inverter, PANEL_MODELS, TUBULAR_UNIT};

use super::error::{DomainViolation, SizingError};
use super::policy::{
    AC_NOMINAL_VOLTS, AC_SAFETY_MARGIN, ARRAY_CEILING_W, AVR_THRESHOLD_W, BACKUP_BOUNDS_HOURS,
    BATTERY_BUFFER_FACTOR, BATTERY_EFFICIENCY, BATTERY_PARALLEL_ADVISORY, DC_SAFETY_MARGIN,
    DEMAND_BOUNDS_KWH, DERATING_FACTOR, InverterFallback, PEAK_DUTY_HOURS, PEAK_SURGE_FACTOR,
    SizingPolicy,
};
use super::result::{
    Accessories, Advisory, BatteryBank, BreakerRatings, CableSizes, ChargeController, Chemistry,
    PanelArray, SystemDesign,
};

/// Checks that demand and backup duration lie within operational bounds.
///
/// # Errors
///
/// Returns [`SizingError::Domain`] naming the offending field, its value,
/// and the violated bounds.
pub fn validate_inputs(daily_energy_kwh: f32, backup_hours: f32) -> Result<(), SizingError> {
    let (min_kwh, max_kwh) = DEMAND_BOUNDS_KWH;
    if !(min_kwh..=max_kwh).contains(&daily_energy_kwh) {
        return Err(SizingError::Domain(DomainViolation {
            field: "daily_energy_kwh",
            value: daily_energy_kwh,
            min: min_kwh,
            max: max_kwh,
        }));
    }

    let (min_h, max_h) = BACKUP_BOUNDS_HOURS;
    if !(min_h..=max_h).contains(&backup_hours) {
        return Err(SizingError::Domain(DomainViolation {
            field: "backup_hours",
            value: backup_hours,
            min: min_h,
            max: max_h,
        }));
    }

    Ok(())
}

/// Sizes a complete system for the given demand, backup duration, and
/// worst-month daily yield (kWh/kWp/day).
///
/// # Errors
///
/// - [`SizingError::Domain`] when an input is out of bounds (checked
///   before any catalog access).
/// - [`SizingError::CeilingExceeded`] when the required array exceeds the
///   supported maximum and the policy is strict.
/// - [`SizingError::CatalogExhausted`] when a selection step finds no
///   qualifying entry and the policy forbids substitution.
pub fn size_system(
    daily_energy_kwh: f32,
    backup_hours: f32,
    worst_month_yield: f32,
    policy: &SizingPolicy,
) -> Result<SystemDesign, SizingError> {
    validate_inputs(daily_energy_kwh, backup_hours)?;

    let required_kwp = daily_energy_kwh / (worst_month_yield * DERATING_FACTOR);
    let required_w = required_kwp * 1000.0;

    let mut advisories = Vec::new();
    let oversized = required_w > ARRAY_CEILING_W;
    if oversized {
        if policy.strict_ceiling {
            return Err(SizingError::CeilingExceeded {
                required_w,
                limit_w: ARRAY_CEILING_W,
            });
        }
        advisories.push(Advisory::ArrayOverCeiling {
            required_w,
            limit_w: ARRAY_CEILING_W,
        });
    }

    let inverter = select_inverter(daily_energy_kwh, required_w, policy, &mut advisories)?;
    let panels = select_panels(required_kwp, required_w);
    let battery = select_battery(
        daily_energy_kwh,
        backup_hours,
        inverter.voltage,
        policy,
        &mut advisories,
    )?;

    let dc_amps = panels.total_watts / inverter.voltage as f32 * DC_SAFETY_MARGIN;
    let ac_amps = inverter.watts / AC_NOMINAL_VOLTS * AC_SAFETY_MARGIN;

    Ok(SystemDesign {
        system_voltage: inverter.voltage,
        inverter_watts: inverter.watts,
        battery,
        panels,
        charge_controller: ChargeController {
            kind: "Built-in MPPT",
            amps: inverter.mppt_amps,
            count: 1,
        },
        cables: CableSizes {
            dc_mm2: dc_cable_mm2(dc_amps),
            ac_mm2: ac_cable_mm2(ac_amps),
        },
        breakers: BreakerRatings {
            dc_amps: dc_amps.ceil() as u32,
            ac_amps: ac_amps.ceil() as u32,
        },
        accessories: Accessories {
            surge_protector: true,
            voltage_regulator: inverter.watts >= AVR_THRESHOLD_W,
        },
        oversized,
        advisories,
    })
}

/// Peak instantaneous draw estimated from daily energy: the demand drawn
/// over a 4-hour-equivalent duty cycle, with surge margin.
fn peak_power_w(daily_energy_kwh: f32) -> f32 {
    daily_energy_kwh * 1000.0 / PEAK_DUTY_HOURS * PEAK_SURGE_FACTOR
}

fn select_inverter(
    daily_energy_kwh: f32,
    required_w: f32,
    policy: &SizingPolicy,
    advisories: &mut Vec<Advisory>,
) -> Result<Inverter, SizingError> {
    let peak_w = peak_power_w(daily_energy_kwh);

    // First fit in ascending-capacity order; both criteria are inclusive.
    if let Some(inv) = INVERTERS
        .iter()
        .find(|inv| inv.watts >= peak_w && inv.max_pv_input_w >= required_w)
    {
        return Ok(*inv);
    }

    match policy.inverter_fallback {
        InverterFallback::Fail => Err(SizingError::CatalogExhausted {
            component: "inverter",
            detail: format!(
                "no model covers a {peak_w:.0} W peak load with {required_w:.0} W of PV input"
            ),
        }),
        InverterFallback::ClosestMatch => {
            let mut best = INVERTERS[0];
            for inv in &INVERTERS[1..] {
                if (inv.watts - peak_w).abs() < (best.watts - peak_w).abs() {
                    best = *inv;
                }
            }
            advisories.push(Advisory::InverterSubstituted {
                peak_needed_w: peak_w,
                rating_w: best.watts,
            });
            Ok(best)
        }
    }
}

fn select_panels(required_kwp: f32, required_w: f32) -> PanelArray {
    let model = PANEL_MODELS
        .iter()
        .find(|p| required_kwp <= p.max_system_kwp)
        .unwrap_or(&PANEL_MODELS[PANEL_MODELS.len() - 1]);

    let count = (required_w / model.watts).ceil() as u32;
    PanelArray {
        unit_watts: model.watts,
        count,
        total_watts: count as f32 * model.watts,
    }
}

fn select_battery(
    daily_energy_kwh: f32,
    backup_hours: f32,
    voltage: u32,
    policy: &SizingPolicy,
    advisories: &mut Vec<Advisory>,
) -> Result<BatteryBank, SizingError> {
    let mut needed_kwh = daily_energy_kwh * backup_hours * BATTERY_BUFFER_FACTOR;
    if policy.apply_battery_efficiency {
        needed_kwh /= BATTERY_EFFICIENCY;
    }

    let bank = if voltage == 12 {
        let parallel = (needed_kwh / TUBULAR_UNIT.kwh).ceil() as u32;
        BatteryBank {
            chemistry: Chemistry::Tubular,
            unit_amp_hours: TUBULAR_UNIT.amp_hours,
            series: 1,
            parallel,
            total_units: parallel,
        }
    } else if let Some(unit) = catalog::lithium_units_at(voltage).find(|u| u.kwh >= needed_kwh) {
        // Smallest single unit that covers the requirement.
        BatteryBank {
            chemistry: Chemistry::Lithium,
            unit_amp_hours: unit.kwh * 1000.0 / voltage as f32,
            series: 1,
            parallel: 1,
            total_units: 1,
        }
    } else {
        // No single unit is big enough: parallel the largest at this voltage.
        let largest = match catalog::lithium_units_at(voltage).last() {
            Some(unit) => unit,
            None => {
                return Err(SizingError::CatalogExhausted {
                    component: "battery",
                    detail: format!("no lithium units at {voltage} V"),
                });
            }
        };
        let parallel = (needed_kwh / largest.kwh).ceil() as u32;
        BatteryBank {
            chemistry: Chemistry::Lithium,
            unit_amp_hours: largest.kwh * 1000.0 / voltage as f32,
            series: 1,
            parallel,
            total_units: parallel,
        }
    };

    if bank.parallel > BATTERY_PARALLEL_ADVISORY {
        advisories.push(Advisory::HighBatteryParallelCount {
            count: bank.parallel,
        });
    }

    Ok(bank)
}

/// DC cable cross-section (mm²) by current band.
fn dc_cable_mm2(amps: f32) -> u32 {
    if amps <= 50.0 {
        16
    } else if amps <= 100.0 {
        25
    } else {
        35
    }
}

/// AC cable cross-section (mm²) by current band.
fn ac_cable_mm2(amps: f32) -> u32 {
    if amps <= 32.0 {
        6
    } else if amps <= 50.0 {
        10
    } else {
        16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_policy() -> SizingPolicy {
        SizingPolicy::default()
    }

    #[test]
    fn domain_error_below_minimum_demand() {
        let err = size_system(0.09, 12.0, 3.3, &default_policy()).unwrap_err();
        match err {
            SizingError::Domain(v) => {
                assert_eq!(v.field, "daily_energy_kwh");
                assert_eq!(v.min, 0.1);
            }
            other => panic!("expected domain error, got {other:?}"),
        }
    }

    #[test]
    fn domain_error_above_maximum_demand() {
        assert!(matches!(
            size_system(100.1, 12.0, 3.3, &default_policy()),
            Err(SizingError::Domain(_))
        ));
        // Far out of range fails identically, before any catalog work
        assert!(matches!(
            size_system(200.0, 12.0, 3.3, &default_policy()),
            Err(SizingError::Domain(_))
        ));
    }

    #[test]
    fn domain_bounds_are_inclusive() {
        assert!(size_system(0.1, 12.0, 3.3, &default_policy()).is_ok());
        assert!(size_system(100.0, 12.0, 4.5, &default_policy()).is_ok());
        assert!(size_system(5.0, 8.0, 3.3, &default_policy()).is_ok());
        assert!(size_system(5.0, 24.0, 3.3, &default_policy()).is_ok());
    }

    #[test]
    fn domain_error_backup_hours() {
        for bad in [7.0, 25.0] {
            let err = size_system(5.0, bad, 3.3, &default_policy()).unwrap_err();
            match err {
                SizingError::Domain(v) => assert_eq!(v.field, "backup_hours"),
                other => panic!("expected domain error, got {other:?}"),
            }
        }
    }

    #[test]
    fn household_scenario_selects_small_system() {
        // 5 kWh/day, 12 h backup, 3.3 kWh/kWp/day worst month
        let design = size_system(5.0, 12.0, 3.3, &default_policy()).expect("sizes");

        assert_eq!(design.system_voltage, 12);
        assert_eq!(design.inverter_watts, 2000.0);

        // ~2.02 kWp requirement lands in the 400 W panel tier
        assert_eq!(design.panels.unit_watts, 400.0);
        assert_eq!(design.panels.count, 6);
        assert_eq!(design.panels.total_watts, 2400.0);

        // 5 × 12 × 1.3 / 0.85 ≈ 91.8 kWh of tubular storage
        assert_eq!(design.battery.chemistry, Chemistry::Tubular);
        assert_eq!(design.battery.unit_amp_hours, 220.0);
        assert_eq!(design.battery.series, 1);
        assert_eq!(design.battery.parallel, 35);
        assert_eq!(design.battery.total_units, 35);

        // 35 strings draws the high-parallel advisory
        assert!(design.advisories.iter().any(|a| matches!(
            a,
            Advisory::HighBatteryParallelCount { count: 35 }
        )));
        assert!(!design.oversized);
    }

    #[test]
    fn household_scenario_protection_ratings() {
        let design = size_system(5.0, 12.0, 3.3, &default_policy()).expect("sizes");

        // DC: 2400 W / 12 V × 1.25 = 250 A
        assert_eq!(design.breakers.dc_amps, 250);
        assert_eq!(design.cables.dc_mm2, 35);

        // AC: 2000 W / 230 V × 1.1 ≈ 9.57 A
        assert_eq!(design.breakers.ac_amps, 10);
        assert_eq!(design.cables.ac_mm2, 6);

        assert!(design.accessories.surge_protector);
        assert!(!design.accessories.voltage_regulator); // below 5 kW

        assert_eq!(design.charge_controller.kind, "Built-in MPPT");
        assert_eq!(design.charge_controller.amps, 80);
        assert_eq!(design.charge_controller.count, 1);
    }

    #[test]
    fn mid_size_scenario_selects_48v_tier() {
        // 20 kWh/day, 24 h backup, 4.0 kWh/kWp/day
        let design = size_system(20.0, 24.0, 4.0, &default_policy()).expect("sizes");

        // ~6.67 kWp: 600 W panel tier, 12 panels
        assert_eq!(design.panels.unit_watts, 600.0);
        assert_eq!(design.panels.count, 12);

        // peak 7500 W → 8200 W / 48 V inverter, PV input 9840 ≥ 6667
        assert_eq!(design.inverter_watts, 8200.0);
        assert_eq!(design.system_voltage, 48);
        assert!(design.inverter_watts * 1.2 >= 20.0 / (4.0 * 0.75) * 1000.0);

        assert_eq!(design.battery.chemistry, Chemistry::Lithium);
        assert!(design.accessories.voltage_regulator); // 8.2 kW ≥ 5 kW
        assert!(!design.oversized);
    }

    #[test]
    fn lithium_single_unit_when_capacity_suffices() {
        // 1 kWh/day, 8 h backup → needed = 1×8×1.3/0.85 ≈ 12.2 kWh.
        // Forcing a 24 V selection isn't possible through demand alone at
        // this size (the 2 kW/12 V inverter wins), so drive the helper
        // directly.
        let mut advisories = Vec::new();
        let bank = select_battery(1.0, 8.0, 48, &default_policy(), &mut advisories).expect("bank");
        assert_eq!(bank.chemistry, Chemistry::Lithium);
        assert_eq!(bank.parallel, 1);
        assert_eq!(bank.total_units, 1);
        // smallest covering unit is the 15.5 kWh model
        assert!((bank.unit_amp_hours - 15.5 * 1000.0 / 48.0).abs() < 1e-3);
        assert!(advisories.is_empty());
    }

    #[test]
    fn lithium_parallel_fallback_uses_largest_unit() {
        let mut advisories = Vec::new();
        // 20 kWh/day × 24 h × 1.3 / 0.85 ≈ 734 kWh → 48 × 15.5 kWh units
        let bank =
            select_battery(20.0, 24.0, 48, &default_policy(), &mut advisories).expect("bank");
        assert_eq!(bank.parallel, 48);
        assert_eq!(bank.total_units, 48);
        assert!((bank.unit_amp_hours - 15.5 * 1000.0 / 48.0).abs() < 1e-3);
        assert_eq!(advisories.len(), 1);
    }

    #[test]
    fn battery_without_efficiency_factor_needs_fewer_units() {
        let lax = SizingPolicy {
            apply_battery_efficiency: false,
            ..SizingPolicy::default()
        };
        let strict = default_policy();

        let with = size_system(5.0, 12.0, 3.3, &strict).expect("sizes");
        let without = size_system(5.0, 12.0, 3.3, &lax).expect("sizes");

        // 78 kWh vs ~91.8 kWh of tubular storage
        assert_eq!(without.battery.parallel, 30);
        assert!(without.battery.parallel < with.battery.parallel);
    }

    #[test]
    fn ceiling_flagged_by_default() {
        // 100 kWh/day at 3.3 needs ~40 kWp, far over the 12.6 kW limit
        let design = size_system(100.0, 12.0, 3.3, &default_policy()).expect("sizes");
        assert!(design.oversized);
        assert!(design
            .advisories
            .iter()
            .any(|a| matches!(a, Advisory::ArrayOverCeiling { .. })));
        // the largest panel model carries the oversized array
        assert_eq!(design.panels.unit_watts, 600.0);
    }

    #[test]
    fn ceiling_fatal_when_strict() {
        let policy = SizingPolicy {
            strict_ceiling: true,
            ..SizingPolicy::default()
        };
        let err = size_system(100.0, 12.0, 3.3, &policy).unwrap_err();
        assert!(matches!(err, SizingError::CeilingExceeded { .. }));
    }

    #[test]
    fn inverter_exhaustion_fails_under_fail_policy() {
        let policy = SizingPolicy {
            inverter_fallback: InverterFallback::Fail,
            ..SizingPolicy::default()
        };
        // peak = 100 kWh → 37.5 kW, beyond the largest model
        let err = size_system(100.0, 12.0, 3.3, &policy).unwrap_err();
        match err {
            SizingError::CatalogExhausted { component, .. } => {
                assert_eq!(component, "inverter");
            }
            other => panic!("expected catalog exhaustion, got {other:?}"),
        }
    }

    #[test]
    fn inverter_exhaustion_substitutes_closest_by_default() {
        let design = size_system(100.0, 12.0, 3.3, &default_policy()).expect("sizes");
        // closest rating to a 37.5 kW peak is the 10.2 kW model
        assert_eq!(design.inverter_watts, 10200.0);
        assert!(design
            .advisories
            .iter()
            .any(|a| matches!(a, Advisory::InverterSubstituted { .. })));
    }

    #[test]
    fn pv_input_criterion_can_skip_rating_matches() {
        // 4 kWh/day: peak 1500 W fits the 2 kW model, but at 4.85 kWp the
        // required 4850 W of PV exceeds its 2400 W input, and the 24 V
        // models' 5040 W input picks up the slack.
        let design = size_system(4.0, 12.0, 1.1, &default_policy()).expect("sizes");
        assert_eq!(design.inverter_watts, 4200.0);
        assert_eq!(design.system_voltage, 24);
    }

    #[test]
    fn identical_inputs_produce_identical_designs() {
        let a = size_system(7.5, 16.0, 3.8, &default_policy()).expect("sizes");
        let b = size_system(7.5, 16.0, 3.8, &default_policy()).expect("sizes");
        assert_eq!(a, b);
    }

    #[test]
    fn cable_bands() {
        assert_eq!(dc_cable_mm2(50.0), 16);
        assert_eq!(dc_cable_mm2(50.1), 25);
        assert_eq!(dc_cable_mm2(100.0), 25);
        assert_eq!(dc_cable_mm2(100.1), 35);

        assert_eq!(ac_cable_mm2(32.0), 6);
        assert_eq!(ac_cable_mm2(32.1), 10);
        assert_eq!(ac_cable_mm2(50.0), 10);
        assert_eq!(ac_cable_mm2(50.1), 16);
    }

    #[test]
    fn breaker_is_ceiling_of_current() {
        let design = size_system(5.0, 12.0, 3.3, &default_policy()).expect("sizes");
        let dc = design.panels.total_watts / design.system_voltage as f32 * 1.25;
        let ac = design.inverter_watts / 230.0 * 1.1;
        assert_eq!(design.breakers.dc_amps, dc.ceil() as u32);
        assert_eq!(design.breakers.ac_amps, ac.ceil() as u32);
    }
}
