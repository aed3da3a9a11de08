//! Quote state: the unit of persistence
//!
//! A `QuoteState` holds everything a user has entered. It is created fresh,
//! reset, or restored from a snapshot by the host; every edit is followed
//! by a full reprice.

use crate::catalog::keys::StoneRole;
use crate::catalog::BASE_CURRENCY;
use crate::core::NumericField;
use crate::models::labor::LaborSpec;
use crate::models::metal::MetalSpec;
use crate::models::packaging::PackagingSpec;
use crate::models::stone::StoneLine;
use serde::{Deserialize, Serialize};

/// Quote number in the `QYYYYMMDD-HHMMSS` form.
///
/// The engine has no clock; the host passes the current local time.
///
/// # Example
/// ```
/// use jewelry_quote_core_rs::models::quote_number;
///
/// assert_eq!(quote_number(2026, 3, 7, 9, 5, 0), "Q20260307-090500");
/// ```
pub fn quote_number(year: u32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> String {
    format!(
        "Q{:04}{:02}{:02}-{:02}{:02}{:02}",
        year, month, day, hour, minute, second
    )
}

/// All user-entered data of one quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteState {
    pub quote_no: String,

    #[serde(default)]
    pub customer_name: String,

    #[serde(default)]
    pub product_name: String,

    /// Display currency code
    pub currency: String,

    pub stones: Vec<StoneLine>,

    #[serde(default)]
    pub metal: MetalSpec,

    #[serde(default)]
    pub labor: LaborSpec,

    #[serde(default)]
    pub packaging: PackagingSpec,

    /// Profit margin in percent
    #[serde(default)]
    pub profit_rate: NumericField,

    /// Tax in percent, applied after profit
    #[serde(default)]
    pub tax_rate: NumericField,
}

impl QuoteState {
    /// Fresh quote with a single main colored-gem line
    pub fn new(quote_no: impl Into<String>) -> Self {
        Self {
            quote_no: quote_no.into(),
            customer_name: String::new(),
            product_name: String::new(),
            currency: BASE_CURRENCY.to_string(),
            stones: vec![StoneLine::colored_gem(StoneRole::Main)],
            metal: MetalSpec::default(),
            labor: LaborSpec::default(),
            packaging: PackagingSpec::default(),
            profit_rate: NumericField::empty(),
            tax_rate: NumericField::empty(),
        }
    }

    /// Replace everything with a fresh quote under a new number
    pub fn reset(&mut self, quote_no: impl Into<String>) {
        *self = Self::new(quote_no);
    }

    /// Append a line, returning its id
    pub fn add_stone(&mut self, line: StoneLine) -> String {
        let id = line.id.clone();
        self.stones.push(line);
        id
    }

    /// Remove the line with `id`, if present
    pub fn remove_stone(&mut self, id: &str) -> Option<StoneLine> {
        let index = self.stones.iter().position(|s| s.id == id)?;
        Some(self.stones.remove(index))
    }

    pub fn stone(&self, id: &str) -> Option<&StoneLine> {
        self.stones.iter().find(|s| s.id == id)
    }

    pub fn stone_mut(&mut self, id: &str) -> Option<&mut StoneLine> {
        self.stones.iter_mut().find(|s| s.id == id)
    }

    pub fn with_currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into();
        self
    }

    pub fn with_rates(mut self, profit: impl Into<NumericField>, tax: impl Into<NumericField>) -> Self {
        self.profit_rate = profit.into();
        self.tax_rate = tax.into();
        self
    }
}
