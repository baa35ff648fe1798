use crate::{AppState, controller, error::AppError};
use analytics::{format_currency, format_magnitude};
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::Html,
};
use charts::ChartDescription;
use serde::Serialize;
use std::sync::Arc;

const INDEX_TEMPLATE: &str = include_str!("../assets/index.html");

#[derive(Debug, Serialize)]
pub struct YearsResponse {
    pub years: Vec<i32>,
    pub default_year: i32,
}

/// One yearly row with amounts pre-rendered for display.
#[derive(Debug, Serialize)]
pub struct YearSummary {
    pub year: i32,
    pub export: f64,
    pub import: f64,
    pub volume: f64,
    pub export_label: String,
    pub import_label: String,
    pub volume_label: String,
    pub volume_text: String,
}

/// # GET /
/// The dashboard page. Charts are fetched from the JSON endpoints below.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(INDEX_TEMPLATE.replace("{{title}}", &escape_html(&state.title)))
}

/// # GET /api/years
/// Dropdown options and the preselected year.
pub async fn get_years(State(state): State<Arc<AppState>>) -> Json<YearsResponse> {
    Json(YearsResponse {
        years: state.years.clone(),
        default_year: state.default_year,
    })
}

/// # GET /api/charts/yearly
pub async fn get_yearly_chart(State(state): State<Arc<AppState>>) -> Json<ChartDescription> {
    Json(controller::on_initial_load(&state))
}

/// # GET /api/charts/monthly/:year
/// Years without data answer with an empty chart, not an error.
pub async fn get_monthly_chart(
    State(state): State<Arc<AppState>>,
    year: Result<Path<i32>, PathRejection>,
) -> Result<Json<ChartDescription>, AppError> {
    let Path(year) = year.map_err(|e| AppError::BadRequest(format!("invalid year: {e}")))?;
    Ok(Json(controller::on_year_selected(&state, year)))
}

/// # GET /api/summary/yearly
/// Yearly totals as a table, with abbreviated and full-precision labels.
pub async fn get_yearly_summary(State(state): State<Arc<AppState>>) -> Json<Vec<YearSummary>> {
    let rows = state
        .yearly
        .iter()
        .map(|row| YearSummary {
            year: row.year,
            export: to_f64(row.export),
            import: to_f64(row.import),
            volume: to_f64(row.volume),
            export_label: format_magnitude(row.export),
            import_label: format_magnitude(row.import),
            volume_label: format_magnitude(row.volume),
            volume_text: format_currency(row.volume),
        })
        .collect();
    Json(rows)
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("no such route".to_string())
}

fn to_f64(value: rust_decimal::Decimal) -> f64 {
    use rust_decimal::prelude::ToPrimitive;
    value.to_f64().unwrap_or_default()
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
