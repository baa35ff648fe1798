use crate::figure::{Axis, ChartDescription, Layout, LineStyle, Title, Trace};
use analytics::format_magnitude;
use core_types::{MonthlyAggregate, TradeFlow, TradeTotals, YearlyAggregate};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

/// How one measure is drawn: which flow, under which legend name, in which color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesSpec {
    pub flow: TradeFlow,
    pub name: &'static str,
    pub color: &'static str,
}

/// The dashboard's three lines, in legend order.
pub const TRADE_SERIES: [SeriesSpec; 3] = [
    SeriesSpec {
        flow: TradeFlow::Export,
        name: "Exportvolumen",
        color: "#1f77b4",
    },
    SeriesSpec {
        flow: TradeFlow::Import,
        name: "Importvolumen",
        color: "#ff7f0e",
    },
    SeriesSpec {
        flow: TradeFlow::Volume,
        name: "Gesamthandelsvolumen",
        color: "#2ca02c",
    },
];

const LINE_WIDTH: u32 = 2;
const TARGET_TICKS: f64 = 5.0;

/// What the x axis counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XAxis {
    Year,
    Month,
}

impl XAxis {
    pub fn label(&self) -> &'static str {
        match self {
            XAxis::Year => "Jahr",
            XAxis::Month => "Monat",
        }
    }
}

/// An aggregate row that can be placed on a chart's x axis.
pub trait ChartRow: TradeTotals {
    fn x(&self) -> i32;
}

impl ChartRow for YearlyAggregate {
    fn x(&self) -> i32 {
        self.year
    }
}

impl ChartRow for MonthlyAggregate {
    fn x(&self) -> i32 {
        self.month as i32
    }
}

/// Shapes already-aggregated rows into one `lines+markers` trace per series.
///
/// Rows are plotted in the order given. An empty slice yields one empty trace
/// per series.
pub fn build_series<R: ChartRow>(
    rows: &[R],
    x_axis: XAxis,
    series: &[SeriesSpec],
    title: &str,
) -> ChartDescription {
    let x: Vec<i32> = rows.iter().map(|r| r.x()).collect();

    let data = series
        .iter()
        .map(|spec| Trace {
            kind: "scatter".to_string(),
            mode: "lines+markers".to_string(),
            name: spec.name.to_string(),
            x: x.clone(),
            y: rows.iter().map(|r| to_plot_value(spec.flow.pick(r))).collect(),
            line: LineStyle {
                width: LINE_WIDTH,
                color: spec.color.to_string(),
            },
            hovertemplate: hover_template(spec.name, x_axis),
        })
        .collect();

    let values: Vec<Decimal> = rows
        .iter()
        .flat_map(|r| series.iter().map(move |spec| spec.flow.pick(r)))
        .collect();

    ChartDescription {
        data,
        layout: Layout {
            title: Title::from(title),
            xaxis: Axis {
                title: Some(Title::from(x_axis.label())),
                tickmode: Some("linear".to_string()),
                dtick: Some(1),
                ..Axis::default()
            },
            yaxis: value_axis(&values),
        },
    }
}

/// The yearly totals chart shown on page load.
pub fn yearly_chart(rows: &[YearlyAggregate]) -> ChartDescription {
    build_series(
        rows,
        XAxis::Year,
        &TRADE_SERIES,
        "Jährliches Handelsvolumen Deutschlands",
    )
}

/// The month-by-month chart for one selected year.
pub fn monthly_chart(year: i32, rows: &[MonthlyAggregate]) -> ChartDescription {
    build_series(
        rows,
        XAxis::Month,
        &TRADE_SERIES,
        &format!("Monatliches Handelsvolumen {year}"),
    )
}

/// Plotly's own d3 format does the thousands grouping on hover.
fn hover_template(name: &str, x_axis: XAxis) -> String {
    format!(
        "<b>{name}</b><br>{}: %{{x}}<br>Wert: %{{y:,.0f}} €",
        x_axis.label()
    )
}

fn to_plot_value(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Value axis with evenly spaced, rounded ticks labelled by `format_magnitude`.
fn value_axis(values: &[Decimal]) -> Axis {
    let mut axis = Axis {
        title: Some(Title::from("Wert (€)")),
        ..Axis::default()
    };

    let max = values.iter().copied().max().unwrap_or_default().max(Decimal::ZERO);
    let min = values.iter().copied().min().unwrap_or_default().min(Decimal::ZERO);
    let span = to_plot_value(max - min);
    if span <= 0.0 {
        return axis;
    }

    let step = nice_step(span / TARGET_TICKS);
    let first = (to_plot_value(min) / step).floor() as i64;
    let last = (to_plot_value(max) / step).ceil() as i64;

    let tickvals: Vec<f64> = (first..=last).map(|i| i as f64 * step).collect();
    let ticktext = tickvals
        .iter()
        .map(|v| format_magnitude(Decimal::from_f64(*v).unwrap_or_default().round_dp(2)))
        .collect();

    axis.tickmode = Some("array".to_string());
    axis.tickvals = Some(tickvals);
    axis.ticktext = Some(ticktext);
    axis
}

/// Rounds a raw step up to 1, 2 or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    let base = 10f64.powf(raw.log10().floor());
    let fraction = raw / base;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}
