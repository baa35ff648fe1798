//! The dashboard's two interactions, as plain functions over `AppState`.
//!
//! Neither function mutates anything, so they can run concurrently for any
//! number of browser sessions.

use crate::AppState;
use charts::{ChartDescription, monthly_chart, yearly_chart};
use datastore::RawTable;

/// Page load: the yearly totals chart over the whole dataset.
pub fn on_initial_load(state: &AppState) -> ChartDescription {
    yearly_chart(&state.yearly)
}

/// Dropdown change: the month-by-month chart for `year`.
///
/// A year without data produces a chart with three empty series.
pub fn on_year_selected(state: &AppState, year: i32) -> ChartDescription {
    let rows = state.engine.monthly(&state.table, year);
    if rows.is_empty() {
        tracing::info!(year, "No rows for selected year.");
    }
    monthly_chart(year, &rows)
}

/// Picks the dropdown's initial value: the configured year when the data has
/// it, otherwise the latest year present. An empty dataset keeps the
/// configured year.
pub fn resolve_default_year(table: &RawTable, configured: i32) -> i32 {
    if table.contains_year(configured) {
        configured
    } else {
        table.latest_year().unwrap_or(configured)
    }
}
