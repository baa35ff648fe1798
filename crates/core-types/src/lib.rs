pub mod enums;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::TradeFlow;
pub use structs::{MonthlyAggregate, TradeRecord, TradeTotals, YearlyAggregate};
