use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Read access to the export / import / volume measures of an aggregate row.
pub trait TradeTotals {
    fn export(&self) -> Decimal;
    fn import(&self) -> Decimal;
    fn volume(&self) -> Decimal;
}

/// One row of the source dataset.
///
/// `year` and `month` are derived from `period` on construction and are never
/// set independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub period: NaiveDate,
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Trading partner, when the dataset carries one. Not used for aggregation.
    pub country: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub export_value: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub import_value: Decimal,
}

impl TradeRecord {
    pub fn new(
        period: NaiveDate,
        country: Option<String>,
        export_value: Decimal,
        import_value: Decimal,
    ) -> Self {
        Self {
            period,
            year: period.year(),
            month: period.month(),
            country,
            export_value,
            import_value,
        }
    }
}

/// Totals for one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyAggregate {
    pub year: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub export: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub import: Decimal,
    /// Always `export + import`.
    #[serde(with = "rust_decimal::serde::float")]
    pub volume: Decimal,
}

impl YearlyAggregate {
    pub fn new(year: i32, export: Decimal, import: Decimal) -> Self {
        Self {
            year,
            export,
            import,
            volume: export + import,
        }
    }
}

impl TradeTotals for YearlyAggregate {
    fn export(&self) -> Decimal {
        self.export
    }
    fn import(&self) -> Decimal {
        self.import
    }
    fn volume(&self) -> Decimal {
        self.volume
    }
}

/// Totals for one month of a selected year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    /// Calendar month, 1-12.
    pub month: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub export: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub import: Decimal,
    /// Always `export + import`.
    #[serde(with = "rust_decimal::serde::float")]
    pub volume: Decimal,
}

impl MonthlyAggregate {
    pub fn new(month: u32, export: Decimal, import: Decimal) -> Self {
        Self {
            month,
            export,
            import,
            volume: export + import,
        }
    }
}

impl TradeTotals for MonthlyAggregate {
    fn export(&self) -> Decimal {
        self.export
    }
    fn import(&self) -> Decimal {
        self.import
    }
    fn volume(&self) -> Decimal {
        self.volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TradeFlow;
    use rust_decimal_macros::dec;

    #[test]
    fn record_derives_year_and_month_from_period() {
        let period = NaiveDate::from_ymd_opt(2023, 7, 1).unwrap();
        let record = TradeRecord::new(period, Some("Frankreich".into()), dec!(10), dec!(4));

        assert_eq!(record.year, 2023);
        assert_eq!(record.month, 7);
    }

    #[test]
    fn aggregates_derive_volume() {
        let yearly = YearlyAggregate::new(2024, dec!(500), dec!(100));
        assert_eq!(yearly.volume, dec!(600));

        let monthly = MonthlyAggregate::new(3, dec!(12.5), dec!(7.25));
        assert_eq!(monthly.volume, dec!(19.75));
        assert_eq!(TradeFlow::Volume.pick(&monthly), dec!(19.75));
        assert_eq!(TradeFlow::Import.pick(&monthly), dec!(7.25));
    }

    #[test]
    fn aggregates_serialize_amounts_as_numbers() {
        let yearly = YearlyAggregate::new(2023, dec!(300), dec!(80));
        let json = serde_json::to_value(&yearly).unwrap();

        assert_eq!(json["year"], 2023);
        assert_eq!(json["volume"].as_f64(), Some(380.0));
    }
}
