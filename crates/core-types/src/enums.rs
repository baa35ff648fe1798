use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::structs::TradeTotals;

/// The three measures every trade table carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeFlow {
    Export,
    Import,
    Volume,
}

impl TradeFlow {
    /// Reads the matching measure from an aggregate row.
    pub fn pick<T: TradeTotals + ?Sized>(&self, row: &T) -> Decimal {
        match self {
            TradeFlow::Export => row.export(),
            TradeFlow::Import => row.import(),
            TradeFlow::Volume => row.volume(),
        }
    }
}
