//! Structured sizing errors.

use std::error::Error;
use std::fmt;

/// An input value outside its operational bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainViolation {
    /// Which input was out of range (e.g. `"daily_energy_kwh"`).
    pub field: &'static str,
    /// The offending value.
    pub value: f32,
    /// Inclusive lower bound.
    pub min: f32,
    /// Inclusive upper bound.
    pub max: f32,
}

impl DomainViolation {
    /// Distance from the nearest violated bound.
    pub fn excess(&self) -> f32 {
        if self.value < self.min {
            self.min - self.value
        } else {
            self.value - self.max
        }
    }
}

/// Why a sizing call could not produce a design.
#[derive(Debug, Clone, PartialEq)]
pub enum SizingError {
    /// Input outside operational bounds; raised before any catalog access.
    Domain(DomainViolation),
    /// No catalog entry satisfies the selection criteria.
    CatalogExhausted {
        /// Which component search came up empty.
        component: &'static str,
        /// What was asked of the catalog.
        detail: String,
    },
    /// Required array wattage exceeds the supported maximum (strict mode).
    CeilingExceeded {
        /// Required PV array wattage.
        required_w: f32,
        /// The supported ceiling.
        limit_w: f32,
    },
}

impl fmt::Display for SizingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizingError::Domain(v) => write!(
                f,
                "{} = {} is outside [{}, {}] (off by {:.2})",
                v.field,
                v.value,
                v.min,
                v.max,
                v.excess()
            ),
            SizingError::CatalogExhausted { component, detail } => {
                write!(f, "no suitable {component} in catalog: {detail}")
            }
            SizingError::CeilingExceeded { required_w, limit_w } => write!(
                f,
                "required array of {required_w:.0} W exceeds the {limit_w:.0} W system limit; \
                 reduce consumption or relax the ceiling policy"
            ),
        }
    }
}

impl Error for SizingError {}
