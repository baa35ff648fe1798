use analytics::AggregationEngine;
use axum::{Router, routing::get};
use configuration::DashboardSettings;
use core_types::YearlyAggregate;
use datastore::RawTable;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
// Note: Tracing is handled by the main application configuration

pub mod controller;
pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
///
/// Built once at startup from the loaded table and never mutated; handlers
/// receive it behind an `Arc`.
#[derive(Debug)]
pub struct AppState {
    pub table: RawTable,
    pub engine: AggregationEngine,
    /// Yearly totals are fixed for the process lifetime, so they are computed once.
    pub yearly: Vec<YearlyAggregate>,
    /// Distinct years in the data, ascending. Populates the dropdown.
    pub years: Vec<i32>,
    pub default_year: i32,
    pub title: String,
}

impl AppState {
    pub fn new(table: RawTable, dashboard: &DashboardSettings) -> Self {
        let engine = AggregationEngine::new();
        let yearly = engine.yearly(&table);
        let years = table.years();
        let default_year = controller::resolve_default_year(&table, dashboard.default_year);

        if default_year != dashboard.default_year {
            tracing::warn!(
                configured = dashboard.default_year,
                using = default_year,
                "Configured default year has no data."
            );
        }

        Self {
            table,
            engine,
            yearly,
            years,
            default_year,
            title: dashboard.title.clone(),
        }
    }
}

/// Defines the application routes over the given state.
pub fn build_router(app_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/years", get(handlers::get_years))
        .route("/api/charts/yearly", get(handlers::get_yearly_chart))
        .route("/api/charts/monthly/:year", get(handlers::get_monthly_chart))
        .route("/api/summary/yearly", get(handlers::get_yearly_summary))
        .fallback(handlers::not_found)
        .with_state(app_state)
        .layer(cors)
        // Logs every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// Serves the dashboard until the process is stopped.
pub async fn run_server(addr: SocketAddr, app_state: AppState) -> anyhow::Result<()> {
    let app = build_router(Arc::new(app_state));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
