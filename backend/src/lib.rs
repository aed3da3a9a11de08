//! Jewelry Quote Core - Rust Engine
//!
//! Deterministic price quotation for custom jewelry: gemstones, precious
//! metal, labor and packaging, with profit and tax compounded on top.
//!
//! # Architecture
//!
//! - **core**: Lenient numeric input and cent rounding
//! - **catalog**: Key spaces, pricing tables, built-in defaults, overrides
//! - **models**: Quote state, stone lines, pricing events
//! - **pricing**: Interpolation, bracket lookup, per-component pricing
//! - **engine**: Full quote pipeline and snapshots
//! - **export**: Plain-text summary
//!
//! # Critical Invariants
//!
//! 1. Pricing never fails; missing data resolves to a logged default
//! 2. Manual prices are never currency-converted
//! 3. Line subtotals are rounded to cents before they are summed
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod catalog;
pub mod core;
pub mod engine;
pub mod export;
pub mod models;
pub mod pricing;

// Re-exports for convenience
pub use catalog::{CatalogError, PricingCatalog, PricingConfig, PricingTables, PricingView};
pub use core::NumericField;
pub use engine::{
    compute_totals, price_quote, AggregationMode, EngineOptions, QuoteBreakdown, QuoteEngine, QuoteInputs,
    QuoteSnapshot, SnapshotError,
};
pub use export::render_quote_text;
pub use models::{
    event::{EventLog, PricingEvent},
    quote::QuoteState,
    stone::{StoneKind, StoneLine, WeightSpec},
    totals::ComputedTotals,
};
pub use pricing::{CurrencyRateTable, MetalSpotRates, TreatmentPolicy};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn jewelry_quote_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::engine::PyQuoteEngine>()?;
    Ok(())
}
