//! PyO3 wrapper for QuoteEngine
//!
//! Quote states cross the boundary as JSON strings (the same shape the
//! host persists); results come back as dicts.

use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::collections::HashMap;

use super::types::{breakdown_to_py, catalog_error, json_error, snapshot_error, totals_to_py};
use crate::catalog::{PricingConfig, BASE_CURRENCY};
use crate::engine::QuoteEngine as RustQuoteEngine;
use crate::models::QuoteState;
use crate::pricing::{CurrencyRateTable, MetalSpotRates};

/// Python wrapper for Rust QuoteEngine
///
/// # Example (from Python)
///
/// ```python
/// from jewelry_quote_core_rs import QuoteEngine
///
/// engine = QuoteEngine()
/// engine.set_currency_rates({"LKR": 300.0, "EUR": 0.92})
/// totals = engine.compute(state_json)
/// print(totals["quote_total"])
/// ```
#[pyclass(name = "QuoteEngine")]
pub struct PyQuoteEngine {
    inner: RustQuoteEngine,
}

fn parse_state(state_json: &str) -> PyResult<QuoteState> {
    serde_json::from_str(state_json).map_err(json_error)
}

#[pymethods]
impl PyQuoteEngine {
    /// Create an engine over the built-in catalog, optionally with a JSON
    /// override document
    #[new]
    #[pyo3(signature = (config_json=None))]
    fn new(config_json: Option<&str>) -> PyResult<Self> {
        let mut inner = RustQuoteEngine::default();
        if let Some(json) = config_json {
            inner.set_config(Some(PricingConfig::from_json(json).map_err(catalog_error)?));
        }
        Ok(PyQuoteEngine { inner })
    }

    /// Replace the pricing overrides (None clears them)
    #[pyo3(signature = (config_json=None))]
    fn set_config(&mut self, config_json: Option<&str>) -> PyResult<()> {
        let config = match config_json {
            Some(json) => Some(PricingConfig::from_json(json).map_err(catalog_error)?),
            None => None,
        };
        self.inner.set_config(config);
        Ok(())
    }

    /// Set display-currency rates relative to USD
    fn set_currency_rates(&mut self, rates: HashMap<String, f64>) {
        self.inner
            .set_rates(Some(CurrencyRateTable::from_rates(BASE_CURRENCY, rates)));
    }

    /// Set spot prices in USD per gram of fine metal
    fn set_metal_spot(&mut self, gold: f64, silver: f64, platinum: f64) {
        self.inner.set_spot(Some(MetalSpotRates {
            gold,
            silver,
            platinum,
        }));
    }

    fn clear_metal_spot(&mut self) {
        self.inner.set_spot(None);
    }

    /// Price a quote and return its six totals
    fn compute(&self, py: Python, state_json: &str) -> PyResult<Py<PyDict>> {
        let state = parse_state(state_json)?;
        totals_to_py(py, &self.inner.totals(&state))
    }

    /// Price a quote and return the full breakdown
    fn breakdown(&self, py: Python, state_json: &str) -> PyResult<Py<PyDict>> {
        let state = parse_state(state_json)?;
        breakdown_to_py(py, &self.inner.quote(&state))
    }

    /// Full breakdown as a JSON string
    fn breakdown_json(&self, state_json: &str) -> PyResult<String> {
        let state = parse_state(state_json)?;
        serde_json::to_string(&self.inner.quote(&state)).map_err(json_error)
    }

    fn export_text(&self, state_json: &str) -> PyResult<String> {
        let state = parse_state(state_json)?;
        Ok(self.inner.export_text(&state))
    }

    /// Fresh quote state as JSON
    #[staticmethod]
    fn new_state(quote_no: &str) -> PyResult<String> {
        serde_json::to_string(&QuoteState::new(quote_no)).map_err(json_error)
    }

    fn snapshot(&self, state_json: &str) -> PyResult<String> {
        let state = parse_state(state_json)?;
        let snapshot = self.inner.snapshot(&state).map_err(snapshot_error)?;
        snapshot.to_json().map_err(snapshot_error)
    }

    /// Restore a snapshot; fails if the effective tables changed
    fn restore(&self, snapshot_json: &str) -> PyResult<String> {
        let state = self.inner.restore(snapshot_json).map_err(snapshot_error)?;
        serde_json::to_string(&state).map_err(json_error)
    }

    fn tables_hash(&self) -> PyResult<String> {
        self.inner.tables_hash().map_err(snapshot_error)
    }
}
