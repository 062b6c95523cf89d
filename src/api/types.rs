//! API response and query types.

use serde::{Deserialize, Serialize};

use crate::catalog::{Inverter, LithiumUnit, PanelModel, TubularUnit};
use crate::demand::aggregate::DemandSummary;
use crate::sizing::result::SystemDesign;

/// Combined design response: demand inputs and the component bill.
#[derive(Debug, Serialize)]
pub struct DesignResponse {
    /// Demand figures the design was sized for.
    pub demand: DemandSummary,
    /// The completed design.
    pub design: SystemDesign,
}

/// Catalog listing, optionally narrowed to one bus voltage.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    /// Inverter models.
    pub inverters: Vec<Inverter>,
    /// Panel models (voltage-independent, always present).
    pub panels: Vec<PanelModel>,
    /// The tubular unit, when the 12 V bus is in scope.
    pub tubular: Option<TubularUnit>,
    /// Lithium units in scope.
    pub lithium: Vec<LithiumUnit>,
}

/// Optional filter for the catalog endpoint.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// Restrict entries to one DC bus voltage (12, 24, or 48).
    pub voltage: Option<u32>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
