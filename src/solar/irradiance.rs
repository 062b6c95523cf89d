//! Monthly solar-yield series and the worst-month reduction.

use serde::{Deserialize, Serialize};

/// Conservative worst-month daily yield (kWh/kWp/day) used when no series
/// is available at all.
pub const DEFAULT_WORST_MONTH_YIELD: f32 = 3.3;

/// Days used to convert a monthly accumulation to a daily average.
const DAYS_PER_MONTH: f32 = 30.0;

/// One month of solar yield for a 1 kWp reference array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyYield {
    /// Month index, 1–12.
    pub month: u8,
    /// Monthly energy yield (kWh per kWp installed).
    pub kwh_per_kwp: f32,
}

/// Reduces a 12-month series to the worst-month daily-average yield
/// (kWh/kWp/day).
///
/// Returns [`DEFAULT_WORST_MONTH_YIELD`] when the series is absent or
/// empty. Ties are broken by first occurrence, so the reduction is stable.
pub fn worst_month_daily_yield(series: Option<&[MonthlyYield]>) -> f32 {
    let series = match series {
        Some(s) if !s.is_empty() => s,
        _ => return DEFAULT_WORST_MONTH_YIELD,
    };

    let worst = series
        .iter()
        .fold(series[0], |worst, &m| {
            if m.kwh_per_kwp < worst.kwh_per_kwp { m } else { worst }
        });
    worst.kwh_per_kwp / DAYS_PER_MONTH
}

/// Builds a 12-entry series from per-month daily averages (kWh/kWp/day).
pub fn series_from_daily(daily: &[f32; 12]) -> Vec<MonthlyYield> {
    daily
        .iter()
        .enumerate()
        .map(|(i, &eday)| MonthlyYield {
            month: i as u8 + 1,
            kwh_per_kwp: eday * DAYS_PER_MONTH,
        })
        .collect()
}
