//! Latitude-band regions and their estimated monthly yield series.
//!
//! When no measured irradiance data is available, sizing falls back to a
//! per-region 12-month estimate. The region seam is a named function so the
//! threshold policy lives in exactly one place.

use super::irradiance::{MonthlyYield, series_from_daily};

/// Broad latitude bands with distinct seasonal yield profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    North,
    Middle,
    South,
}

impl Region {
    /// Maps a site latitude (degrees) to its region.
    ///
    /// Thresholds are inclusive: ≥ 10° North, ≥ 7° Middle, else South.
    pub fn for_latitude(latitude: f32) -> Self {
        if latitude >= 10.0 {
            Region::North
        } else if latitude >= 7.0 {
            Region::Middle
        } else {
            Region::South
        }
    }
}

/// Estimated per-region daily yields (kWh/kWp/day), January to December.
const NORTH_DAILY: [f32; 12] = [
    4.8, 5.1, 5.3, 5.2, 5.0, 4.7, 4.5, 4.3, 4.8, 5.0, 5.2, 5.1,
];
const MIDDLE_DAILY: [f32; 12] = [
    4.4, 4.6, 4.5, 4.5, 4.2, 3.9, 3.6, 3.3, 3.7, 4.0, 4.4, 4.4,
];
const SOUTH_DAILY: [f32; 12] = [
    4.0, 4.2, 4.1, 4.0, 3.8, 3.5, 3.2, 3.0, 3.4, 3.7, 4.0, 4.0,
];

/// Returns the estimated 12-month yield series for a region.
///
/// The result flows through sizing exactly like measured data.
pub fn fallback_series(region: Region) -> Vec<MonthlyYield> {
    let daily = match region {
        Region::North => &NORTH_DAILY,
        Region::Middle => &MIDDLE_DAILY,
        Region::South => &SOUTH_DAILY,
    };
    series_from_daily(daily)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solar::irradiance::worst_month_daily_yield;

    #[test]
    fn latitude_thresholds_are_inclusive() {
        assert_eq!(Region::for_latitude(12.5), Region::North);
        assert_eq!(Region::for_latitude(10.0), Region::North);
        assert_eq!(Region::for_latitude(9.99), Region::Middle);
        assert_eq!(Region::for_latitude(7.0), Region::Middle);
        assert_eq!(Region::for_latitude(6.99), Region::South);
        assert_eq!(Region::for_latitude(4.5), Region::South);
    }

    #[test]
    fn fallback_series_has_twelve_months() {
        for region in [Region::North, Region::Middle, Region::South] {
            let series = fallback_series(region);
            assert_eq!(series.len(), 12);
            assert_eq!(series[0].month, 1);
            assert_eq!(series[11].month, 12);
            assert!(series.iter().all(|m| m.kwh_per_kwp > 0.0));
        }
    }

    #[test]
    fn worst_month_per_region() {
        // August is the worst month in all three estimates
        let north = worst_month_daily_yield(Some(&fallback_series(Region::North)));
        let middle = worst_month_daily_yield(Some(&fallback_series(Region::Middle)));
        let south = worst_month_daily_yield(Some(&fallback_series(Region::South)));
        assert!((north - 4.3).abs() < 1e-5);
        assert!((middle - 3.3).abs() < 1e-5);
        assert!((south - 3.0).abs() < 1e-5);
        assert!(north > middle && middle > south);
    }
}
