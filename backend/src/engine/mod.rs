//! Quote engine
//!
//! Ties the pricing components into one pass over a `QuoteState` and
//! provides snapshot capture/restore.

pub mod checkpoint;
pub mod quote;

pub use checkpoint::{compute_tables_hash, validate_state, QuoteSnapshot, SnapshotError, SNAPSHOT_VERSION};
pub use quote::{
    compute_totals, price_quote, AggregationMode, EngineOptions, QuoteBreakdown, QuoteEngine, QuoteInputs,
};
