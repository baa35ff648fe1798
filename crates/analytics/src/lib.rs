//! # Handelsmonitor Analytics
//!
//! Turns the loaded `RawTable` into the yearly and monthly totals the dashboard
//! plots, and renders amounts for humans.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** no I/O. Inputs are borrowed, outputs are fresh vectors.
//! - **Exact sums:** every amount is a `Decimal`, so `volume == export + import`
//!   holds exactly for every bucket.
//!
//! ## Public API
//!
//! - `AggregationEngine`, `yearly_aggregate`, `monthly_aggregate`
//! - `formatter::{format_magnitude, format_thousands, format_currency}`

// Declare the modules that constitute this crate.
pub mod engine;
pub mod formatter;

// Re-export the key components to create a clean, public-facing API.
pub use engine::{AggregationEngine, monthly_aggregate, yearly_aggregate};
pub use formatter::{format_currency, format_magnitude, format_thousands};
