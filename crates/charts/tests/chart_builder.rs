use charts::{
    ChartDescription, SeriesSpec, TRADE_SERIES, XAxis, build_series, monthly_chart, yearly_chart,
};
use core_types::{MonthlyAggregate, TradeFlow, YearlyAggregate};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn yearly_rows() -> Vec<YearlyAggregate> {
    vec![
        YearlyAggregate::new(2023, dec!(300), dec!(80)),
        YearlyAggregate::new(2024, dec!(500), dec!(100)),
    ]
}

#[test]
fn yearly_chart_has_three_named_colored_series() {
    let chart = yearly_chart(&yearly_rows());

    let names: Vec<_> = chart.data.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Exportvolumen", "Importvolumen", "Gesamthandelsvolumen"]);

    let colors: Vec<_> = chart.data.iter().map(|t| t.line.color.as_str()).collect();
    assert_eq!(colors, vec!["#1f77b4", "#ff7f0e", "#2ca02c"]);

    for trace in &chart.data {
        assert_eq!(trace.kind, "scatter");
        assert_eq!(trace.mode, "lines+markers");
        assert_eq!(trace.line.width, 2);
        assert_eq!(trace.x, vec![2023, 2024]);
        assert!(trace.hovertemplate.contains("Jahr: %{x}"));
        assert!(trace.hovertemplate.contains(&format!("<b>{}</b>", trace.name)));
        assert!(trace.hovertemplate.ends_with("%{y:,.0f} €"));
    }
}

#[test]
fn yearly_chart_plots_each_measure() {
    let chart = yearly_chart(&yearly_rows());

    assert_eq!(chart.trace("Exportvolumen").unwrap().y, vec![300.0, 500.0]);
    assert_eq!(chart.trace("Importvolumen").unwrap().y, vec![80.0, 100.0]);
    assert_eq!(chart.trace("Gesamthandelsvolumen").unwrap().y, vec![380.0, 600.0]);
    assert_eq!(chart.layout.xaxis.title.as_ref().unwrap().text, "Jahr");
}

#[test]
fn monthly_chart_uses_month_numbers_on_x() {
    let rows = vec![
        MonthlyAggregate::new(1, dec!(10), dec!(5)),
        MonthlyAggregate::new(4, dec!(20), dec!(7)),
    ];
    let chart = monthly_chart(2023, &rows);

    for trace in &chart.data {
        assert_eq!(trace.x, vec![1, 4]);
        assert!(trace.hovertemplate.contains("Monat: %{x}"));
    }
    assert_eq!(chart.layout.xaxis.title.as_ref().unwrap().text, "Monat");
    assert!(chart.layout.title.text.contains("2023"));
}

#[test]
fn empty_rows_give_empty_series_not_an_error() {
    let chart = monthly_chart(1999, &[]);

    assert_eq!(chart.data.len(), 3);
    assert!(chart.is_empty());
    assert_eq!(chart.layout.yaxis.tickvals, None);
}

#[test]
fn value_axis_ticks_are_labelled_by_magnitude() {
    let rows = vec![YearlyAggregate::new(2022, dec!(1200000000), dec!(800000000))];
    let chart = yearly_chart(&rows);

    let ticktext = chart.layout.yaxis.ticktext.unwrap();
    assert_eq!(ticktext.first().map(String::as_str), Some("0"));
    assert!(ticktext.iter().any(|t| t == "2.0 Mrd"));
    assert!(ticktext.iter().skip(1).all(|t| t.ends_with("Mio") || t.ends_with("Mrd")));
}

#[test]
fn custom_series_subset_is_respected() {
    let only_volume = [SeriesSpec {
        flow: TradeFlow::Volume,
        name: "Summe",
        color: "#000000",
    }];
    let chart = build_series(&yearly_rows(), XAxis::Year, &only_volume, "Summe");

    assert_eq!(chart.data.len(), 1);
    assert_eq!(chart.data[0].y, vec![380.0, 600.0]);
    assert_eq!(TRADE_SERIES.len(), 3);
}

#[test]
fn serializes_as_plotly_figure_json() {
    let chart = yearly_chart(&yearly_rows());
    let json = serde_json::to_value(&chart).unwrap();

    assert_eq!(json["data"][0]["type"], "scatter");
    assert_eq!(json["data"][2]["y"][1], 600.0);
    assert_eq!(json["layout"]["xaxis"]["dtick"], 1);
    assert!(json["layout"]["xaxis"].get("tickvals").is_none());

    let back: ChartDescription = serde_json::from_value(json).unwrap();
    assert_eq!(back, chart);
}
