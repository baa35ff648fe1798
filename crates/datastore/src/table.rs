use core_types::TradeRecord;
use std::collections::BTreeSet;

/// The loaded dataset: every row of the input file, in file order.
///
/// A `RawTable` is built once and never mutated afterwards; request handlers
/// share it behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    records: Vec<TradeRecord>,
}

impl RawTable {
    pub fn new(records: Vec<TradeRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years present in the data, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn latest_year(&self) -> Option<i32> {
        self.records.iter().map(|r| r.year).max()
    }

    pub fn contains_year(&self, year: i32) -> bool {
        self.records.iter().any(|r| r.year == year)
    }
}

impl FromIterator<TradeRecord> for RawTable {
    fn from_iter<I: IntoIterator<Item = TradeRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
