use analytics::{monthly_aggregate, yearly_aggregate};
use chrono::NaiveDate;
use core_types::TradeRecord;
use datastore::RawTable;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

fn arb_record() -> impl Strategy<Value = TradeRecord> {
    (2018i32..2026, 1u32..=12, 1u32..=28, 0i64..10_000_000, 0i64..10_000_000, 0u32..3).prop_map(
        |(year, month, day, export, import, scale)| {
            let period = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            TradeRecord::new(
                period,
                None,
                Decimal::new(export, scale),
                Decimal::new(import, scale),
            )
        },
    )
}

fn arb_table() -> impl Strategy<Value = RawTable> {
    prop::collection::vec(arb_record(), 0..64).prop_map(RawTable::new)
}

proptest! {
    #[test]
    fn yearly_volume_is_export_plus_import(table in arb_table()) {
        for row in yearly_aggregate(&table) {
            prop_assert_eq!(row.volume, row.export + row.import);
        }
    }

    #[test]
    fn yearly_totals_match_the_raw_sums(table in arb_table()) {
        let rows = yearly_aggregate(&table);

        let export: Decimal = rows.iter().map(|r| r.export).sum();
        let import: Decimal = rows.iter().map(|r| r.import).sum();
        prop_assert_eq!(export, table.records().iter().map(|r| r.export_value).sum::<Decimal>());
        prop_assert_eq!(import, table.records().iter().map(|r| r.import_value).sum::<Decimal>());

        let years: Vec<_> = rows.iter().map(|r| r.year).collect();
        prop_assert_eq!(years, table.years());
    }

    #[test]
    fn monthly_buckets_cover_exactly_the_months_present(
        table in arb_table(),
        year in 2018i32..2026
    ) {
        let rows = monthly_aggregate(&table, year);

        let expected: BTreeSet<u32> = table
            .records()
            .iter()
            .filter(|r| r.year == year)
            .map(|r| r.month)
            .collect();
        let actual: BTreeSet<u32> = rows.iter().map(|r| r.month).collect();
        prop_assert_eq!(actual, expected);

        for row in &rows {
            prop_assert_eq!(row.volume, row.export + row.import);
        }
    }

    #[test]
    fn aggregations_are_idempotent(table in arb_table(), year in 2018i32..2026) {
        prop_assert_eq!(yearly_aggregate(&table), yearly_aggregate(&table));
        prop_assert_eq!(monthly_aggregate(&table, year), monthly_aggregate(&table, year));
    }
}
