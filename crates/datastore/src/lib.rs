//! # Handelsmonitor Datastore
//!
//! Loads the foreign-trade CSV once at startup and hands out an immutable
//! `RawTable` of `TradeRecord`s.
//!
//! ## Public API
//!
//! - `load` / `load_with_layout`: read the dataset from disk.
//! - `load_from_reader`: the same parsing over any `io::Read`.
//! - `RawTable`: the loaded rows plus year lookups.
//! - `DataLoadError`: every way a load can fail. None of them are recoverable.

// Declare the modules that constitute this crate.
pub mod error;
pub mod loader;
pub mod table;

// Re-export the key components to create a clean, public-facing API.
pub use error::DataLoadError;
pub use loader::{
    ColumnLayout, MAX_ABS_AMOUNT, MAX_TOTAL_ABS, load, load_from_reader, load_with_layout,
};
pub use table::RawTable;
