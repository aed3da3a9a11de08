//! Type conversion utilities for FFI boundary
//!
//! Converts engine results into Python dicts and lists.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::catalog::CatalogError;
use crate::engine::{QuoteBreakdown, SnapshotError};
use crate::models::event::PricingEvent;
use crate::models::totals::ComputedTotals;
use crate::pricing::line_item::LinePricing;
use crate::pricing::metal::MetalCost;

// ========================================================================
// Error Conversion
// ========================================================================

pub fn catalog_error(err: CatalogError) -> PyErr {
    PyValueError::new_err(format!("Invalid pricing config: {}", err))
}

pub fn snapshot_error(err: SnapshotError) -> PyErr {
    PyValueError::new_err(format!("Snapshot error: {}", err))
}

pub fn json_error(err: serde_json::Error) -> PyErr {
    PyValueError::new_err(format!("Invalid JSON: {}", err))
}

// ========================================================================
// Result Conversion
// ========================================================================

/// Convert ComputedTotals to Python dict (money as 2-decimal strings)
pub fn totals_to_py(py: Python, totals: &ComputedTotals) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    dict.set_item("stones_total", &totals.stones_total)?;
    dict.set_item("metal_sub", &totals.metal_sub)?;
    dict.set_item("labor_sub", &totals.labor_sub)?;
    dict.set_item("pack_sub", &totals.pack_sub)?;
    dict.set_item("cost_total", &totals.cost_total)?;
    dict.set_item("quote_total", &totals.quote_total)?;

    Ok(dict.into())
}

/// Convert one priced stone line to Python dict
pub fn line_to_py(py: Python, line: &LinePricing) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    dict.set_item("index", line.index)?;
    dict.set_item("id", &line.id)?;
    dict.set_item("total_carats", line.weight.total_carats)?;
    dict.set_item("per_stone_carats", line.weight.per_stone_carats)?;
    dict.set_item("count", line.weight.count)?;
    dict.set_item(
        "basis",
        match line.basis {
            crate::pricing::PricingBasis::PerCarat => "per_carat",
            crate::pricing::PricingBasis::PerPiece => "per_piece",
        },
    )?;
    dict.set_item("quantity", line.quantity)?;
    dict.set_item("unit_price", line.unit_price)?;
    dict.set_item("subtotal", crate::core::cents_to_string(line.subtotal_cents))?;

    Ok(dict.into())
}

/// Convert MetalCost to Python dict
pub fn metal_to_py(py: Python, metal: &MetalCost) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    dict.set_item("name", &metal.name)?;
    dict.set_item("weight_g", metal.weight_g)?;
    dict.set_item("price_per_gram", metal.price_per_gram)?;
    dict.set_item("loss_rate_percent", metal.loss_rate_percent)?;
    dict.set_item("extra_fee", metal.extra_fee)?;
    dict.set_item("subtotal", crate::core::cents_to_string(metal.subtotal_cents))?;

    Ok(dict.into())
}

/// Convert a pricing event to Python dict: `{"type", "line", "detail"}`
pub fn event_to_py(py: Python, event: &PricingEvent) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    dict.set_item("type", event.event_type())?;
    dict.set_item("line", event.line())?;
    dict.set_item("detail", format!("{:?}", event))?;

    Ok(dict.into())
}

/// Convert a full breakdown to Python dict
pub fn breakdown_to_py(py: Python, breakdown: &QuoteBreakdown) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    dict.set_item("currency", &breakdown.currency)?;
    dict.set_item("currency_rate", breakdown.currency_rate)?;
    dict.set_item("totals", totals_to_py(py, &breakdown.totals)?)?;
    dict.set_item("metal", metal_to_py(py, &breakdown.metal)?)?;

    let lines = PyList::empty(py);
    for line in &breakdown.lines {
        lines.append(line_to_py(py, line)?)?;
    }
    dict.set_item("lines", lines)?;

    let events = PyList::empty(py);
    for event in breakdown.events.events() {
        events.append(event_to_py(py, event)?)?;
    }
    dict.set_item("events", events)?;

    Ok(dict.into())
}
