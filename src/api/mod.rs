//! REST API for a completed sizing run.
//!
//! Provides two GET endpoints:
//! - `/design` — demand summary and the full component bill
//! - `/catalog` — component tables with optional bus-voltage filtering

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::demand::aggregate::DemandSummary;
use crate::sizing::result::SystemDesign;

/// Immutable application state shared across all request handlers.
///
/// Constructed once after sizing completes and wrapped in `Arc` — no locks
/// needed since all data is read-only.
pub struct AppState {
    /// Demand figures the design was sized for.
    pub demand: DemandSummary,
    /// The completed design.
    pub design: SystemDesign,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/design", get(handlers::get_design))
        .route("/catalog", get(handlers::get_catalog))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
