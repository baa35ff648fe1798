//! # Handelsmonitor Charts
//!
//! Shapes aggregate rows into declarative Plotly figures. No aggregation
//! happens here and nothing is rendered: the output is plain data for the
//! browser.

pub mod builder;
pub mod figure;

pub use builder::{
    ChartRow, SeriesSpec, TRADE_SERIES, XAxis, build_series, monthly_chart, yearly_chart,
};
pub use figure::{Axis, ChartDescription, Layout, LineStyle, Title, Trace};
