//! Piecewise-linear lookup over an ascending breakpoint table
//!
//! Used to estimate the carat weight of one round melee stone from its
//! diameter in millimetres.
//!
//! # Rules
//!
//! 1. `query <= 0` (or non-finite) → 0, meaning "no size entered"
//! 2. `query <= first size` → first value (no extrapolation below range)
//! 3. `query >= last size` → last value
//! 4. Otherwise interpolate inside the bracket `[x_i, x_{i+1}]` holding the query
//!
//! An empty table, or one where no bracket holds the query, yields 0.

use serde::{Deserialize, Serialize};

/// One `(size, value)` row of an interpolation table.
///
/// Serialized as a two-element array, e.g. `[2.0, 0.035]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Breakpoint {
    pub size: f64,
    pub value: f64,
}

impl Breakpoint {
    pub const fn new(size: f64, value: f64) -> Self {
        Self { size, value }
    }
}

impl From<(f64, f64)> for Breakpoint {
    fn from((size, value): (f64, f64)) -> Self {
        Self { size, value }
    }
}

impl From<Breakpoint> for (f64, f64) {
    fn from(b: Breakpoint) -> Self {
        (b.size, b.value)
    }
}

/// Estimate a value for `query` from `table`.
///
/// # Example
/// ```
/// use jewelry_quote_core_rs::pricing::interpolate::{interpolate, Breakpoint};
///
/// let table = [Breakpoint::new(2.0, 0.035), Breakpoint::new(2.1, 0.040)];
/// assert!((interpolate(&table, 2.05) - 0.0375).abs() < 1e-12);
/// assert_eq!(interpolate(&table, 0.0), 0.0);
/// assert_eq!(interpolate(&table, 9.0), 0.040);
/// ```
pub fn interpolate(table: &[Breakpoint], query: f64) -> f64 {
    if !query.is_finite() || query <= 0.0 {
        return 0.0;
    }
    let (first, last) = match (table.first(), table.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return 0.0,
    };
    if query <= first.size {
        return first.value;
    }
    if query >= last.size {
        return last.value;
    }

    for pair in table.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if query >= lo.size && query <= hi.size {
            if query == lo.size {
                return lo.value;
            }
            if query == hi.size {
                return hi.value;
            }
            let span = hi.size - lo.size;
            if span <= 0.0 {
                return lo.value;
            }
            let t = (query - lo.size) / span;
            return lo.value + t * (hi.value - lo.value);
        }
    }
    0.0
}
