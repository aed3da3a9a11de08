//! Lenient numeric input and money formatting
//!
//! Every number a user types into a quote arrives as text. Reading it must
//! never fail: a quote has to stay computable while the user is mid-edit.
//!
//! # Rules
//!
//! - Parsing follows leading-prefix semantics: `"12.5ct"` reads as `12.5`,
//!   `"abc"` and `""` read as `0`
//! - Non-finite results read as `0`
//! - Money is rounded half-up to cents (`floor(v * 100 + 0.5) / 100`)
//! - Amounts beyond [`MAX_MONEY`] are out of range; pricing substitutes 0

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-entered numeric field, kept verbatim as text.
///
/// The raw text is preserved so that snapshots and text exports reproduce
/// exactly what was typed; [`NumericField::value`] gives the lenient number.
///
/// # Example
/// ```
/// use jewelry_quote_core_rs::core::NumericField;
///
/// assert_eq!(NumericField::from("1.25").value(), 1.25);
/// assert_eq!(NumericField::from("3mm").value(), 3.0);
/// assert_eq!(NumericField::from("").value(), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericField(String);

impl NumericField {
    /// Empty field (reads as 0)
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Lenient numeric value
    pub fn value(&self) -> f64 {
        parse_lenient(&self.0)
    }

    /// Raw text as entered
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when nothing (or only whitespace) was entered
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Raw text, or `"0"` when blank
    pub fn or_zero(&self) -> &str {
        if self.is_blank() {
            "0"
        } else {
            &self.0
        }
    }
}

impl From<&str> for NumericField {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for NumericField {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<f64> for NumericField {
    fn from(value: f64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse the longest numeric prefix of `raw`, or 0.
///
/// Accepts an optional sign, digits with at most one decimal point, and an
/// optional exponent. Leading whitespace is skipped.
pub fn parse_lenient(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let mut mantissa_digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return 0.0;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    match s[..end].parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Largest amount, in either sign, that pricing accepts.
///
/// Any cent count at this magnitude and the sum of many of them stay well
/// inside `i64`.
pub const MAX_MONEY: f64 = 1.0e15;

/// True when `value` is finite and within [`MAX_MONEY`]
pub fn in_money_range(value: f64) -> bool {
    value.is_finite() && value.abs() <= MAX_MONEY
}

/// Round to cents, half-up. Non-finite input rounds to 0.
pub fn round_cents(value: f64) -> f64 {
    to_cents(value) as f64 / 100.0
}

/// Convert a money value to integer cents, half-up.
pub fn to_cents(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    (value * 100.0 + 0.5).floor() as i64
}

/// Format integer cents as a fixed 2-decimal string.
///
/// # Example
/// ```
/// use jewelry_quote_core_rs::core::cents_to_string;
///
/// assert_eq!(cents_to_string(131_609), "1316.09");
/// assert_eq!(cents_to_string(-5), "-0.05");
/// ```
pub fn cents_to_string(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Round and format a money value as a fixed 2-decimal string.
pub fn format_money(value: f64) -> String {
    cents_to_string(to_cents(value))
}
