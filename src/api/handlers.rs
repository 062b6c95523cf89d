//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::catalog::{INVERTERS, LITHIUM_UNITS, PANEL_MODELS, TUBULAR_UNIT};

use super::AppState;
use super::types::{CatalogQuery, CatalogResponse, DesignResponse, ErrorResponse};

/// Returns the demand summary and the full component bill.
///
/// `GET /design` → 200 + `DesignResponse` JSON
pub async fn get_design(State(state): State<Arc<AppState>>) -> Json<DesignResponse> {
    Json(DesignResponse {
        demand: state.demand.clone(),
        design: state.design.clone(),
    })
}

/// Returns the component catalog, optionally narrowed to one bus voltage.
///
/// `GET /catalog` → 200 + full `CatalogResponse` JSON
/// `GET /catalog?voltage=48` → entries on the 48 V bus
/// `GET /catalog?voltage=13` → 400 + `ErrorResponse`
pub async fn get_catalog(Query(query): Query<CatalogQuery>) -> impl IntoResponse {
    match query.voltage {
        None => Ok(Json(CatalogResponse {
            inverters: INVERTERS.to_vec(),
            panels: PANEL_MODELS.to_vec(),
            tubular: Some(TUBULAR_UNIT),
            lithium: LITHIUM_UNITS.to_vec(),
        })),
        Some(v @ (12 | 24 | 48)) => Ok(Json(CatalogResponse {
            inverters: INVERTERS.iter().filter(|i| i.voltage == v).copied().collect(),
            panels: PANEL_MODELS.to_vec(),
            tubular: (v == 12).then_some(TUBULAR_UNIT),
            lithium: LITHIUM_UNITS.iter().filter(|u| u.voltage == v).copied().collect(),
        })),
        Some(v) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("unsupported bus voltage {v}, expected 12, 24, or 48"),
            }),
        )),
    }
}
