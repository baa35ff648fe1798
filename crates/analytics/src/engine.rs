use core_types::{MonthlyAggregate, TradeRecord, YearlyAggregate};
use datastore::RawTable;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// A stateless calculator that groups the raw trade rows into chart-ready totals.
///
/// Both aggregations are pure: the same table always yields the same rows, and
/// the table itself is never touched.
#[derive(Debug, Default, Clone, Copy)]
pub struct AggregationEngine {}

impl AggregationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Totals per calendar year, ascending by year.
    pub fn yearly(&self, table: &RawTable) -> Vec<YearlyAggregate> {
        let rows: Vec<_> = sum_by(table.records().iter(), |r| r.year)
            .into_iter()
            .map(|(year, (export, import))| YearlyAggregate::new(year, export, import))
            .collect();

        tracing::debug!(
            source_rows = table.len(),
            buckets = rows.len(),
            "Yearly aggregate computed."
        );
        rows
    }

    /// Totals per month of `year`, ascending by month.
    ///
    /// Only months that occur in the data are returned. A year with no rows
    /// yields an empty vector.
    pub fn monthly(&self, table: &RawTable, year: i32) -> Vec<MonthlyAggregate> {
        let in_year = table.records().iter().filter(|r| r.year == year);
        let rows: Vec<_> = sum_by(in_year, |r| r.month)
            .into_iter()
            .map(|(month, (export, import))| MonthlyAggregate::new(month, export, import))
            .collect();

        tracing::debug!(year, buckets = rows.len(), "Monthly aggregate computed.");
        rows
    }
}

/// Shorthand for `AggregationEngine::new().yearly(table)`.
pub fn yearly_aggregate(table: &RawTable) -> Vec<YearlyAggregate> {
    AggregationEngine::new().yearly(table)
}

/// Shorthand for `AggregationEngine::new().monthly(table, year)`.
pub fn monthly_aggregate(table: &RawTable, year: i32) -> Vec<MonthlyAggregate> {
    AggregationEngine::new().monthly(table, year)
}

/// Sums export and import values per key. The map keeps keys sorted.
fn sum_by<'a, K, I, F>(records: I, key: F) -> BTreeMap<K, (Decimal, Decimal)>
where
    K: Ord,
    I: Iterator<Item = &'a TradeRecord>,
    F: Fn(&TradeRecord) -> K,
{
    let mut buckets: BTreeMap<K, (Decimal, Decimal)> = BTreeMap::new();
    for record in records {
        let (export, import) = buckets.entry(key(record)).or_default();
        *export += record.export_value;
        *import += record.import_value;
    }
    buckets
}
