//! Display-currency conversion
//!
//! Catalog prices are USD. Auto-derived prices are multiplied by the display
//! currency's rate; manually entered prices are already in the display
//! currency and are never passed through here.

use crate::catalog::BASE_CURRENCY;
use crate::models::event::{EventLog, PricingEvent};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Currency code → multiplier relative to the base currency.
///
/// The base currency is always present with rate 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRateTable {
    base: String,
    rates: BTreeMap<String, f64>,
}

impl CurrencyRateTable {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        let rates = BTreeMap::from([(base.clone(), 1.0)]);
        Self { base, rates }
    }

    /// Build from a plain `{code: rate}` map (as supplied by a rate feed).
    /// The base entry is forced to 1.
    pub fn from_rates<I, S>(base: impl Into<String>, rates: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut table = Self::new(base);
        for (code, rate) in rates {
            table.set_rate(code, rate);
        }
        table
    }

    pub fn with_rate(mut self, code: impl Into<String>, rate: f64) -> Self {
        self.set_rate(code, rate);
        self
    }

    /// Store a rate. Writes to the base currency are ignored.
    pub fn set_rate(&mut self, code: impl Into<String>, rate: f64) {
        let code = code.into();
        if code != self.base {
            self.rates.insert(code, rate);
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Stored rate, if the code is present (may be unusable)
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn rates(&self) -> &BTreeMap<String, f64> {
        &self.rates
    }
}

impl Default for CurrencyRateTable {
    fn default() -> Self {
        Self::new(BASE_CURRENCY)
    }
}

/// Converter fixed to one display currency for a pricing run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyAdjuster {
    rate: f64,
}

impl CurrencyAdjuster {
    /// Pass-through converter (display currency is the base)
    pub fn identity() -> Self {
        Self { rate: 1.0 }
    }

    /// Pick the rate for `target`. Absent, non-finite or non-positive rates
    /// become 1.0 and are logged.
    pub fn resolve(rates: Option<&CurrencyRateTable>, target: &str, events: &mut EventLog) -> Self {
        let base = rates.map(|r| r.base()).unwrap_or(BASE_CURRENCY);
        if target == base {
            return Self::identity();
        }

        match rates.and_then(|r| r.rate(target)) {
            Some(rate) if rate.is_finite() && rate > 0.0 => Self { rate },
            _ => {
                events.log(PricingEvent::CurrencyRateDefaulted {
                    currency: target.to_string(),
                });
                Self::identity()
            }
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Convert a base-currency amount into the display currency
    pub fn convert(&self, amount: f64) -> f64 {
        amount * self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_always_one() {
        let table = CurrencyRateTable::from_rates("USD", [("USD", 3.0), ("LKR", 300.0)]);
        assert_eq!(table.rate("USD"), Some(1.0));
        assert_eq!(table.rate("LKR"), Some(300.0));
    }

    #[test]
    fn test_resolve_known_rate() {
        let table = CurrencyRateTable::default().with_rate("EUR", 0.9);
        let mut events = EventLog::new();
        let fx = CurrencyAdjuster::resolve(Some(&table), "EUR", &mut events);
        assert_eq!(fx.rate(), 0.9);
        assert!(events.is_empty());
    }

    #[test]
    fn test_unusable_rates_default_to_one() {
        let table = CurrencyRateTable::default()
            .with_rate("CNY", 0.0)
            .with_rate("HKD", f64::NAN);
        let mut events = EventLog::new();

        for code in ["CNY", "HKD", "LKR"] {
            let fx = CurrencyAdjuster::resolve(Some(&table), code, &mut events);
            assert_eq!(fx.rate(), 1.0);
        }
        assert_eq!(events.events_of_type("CurrencyRateDefaulted").len(), 3);
    }

    #[test]
    fn test_no_table_base_currency_is_silent() {
        let mut events = EventLog::new();
        let fx = CurrencyAdjuster::resolve(None, "USD", &mut events);
        assert_eq!(fx.convert(12.5), 12.5);
        assert!(events.is_empty());
    }
}
