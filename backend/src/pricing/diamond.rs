//! Diamond per-carat pricing
//!
//! `base[bracket][color][clarity] × cut × fluorescence`, in USD.
//!
//! # Critical Invariants
//!
//! - Bracket selection uses the line's total weight
//! - A weight exactly at a bracket's max belongs to that bracket
//! - Weight ≤ 0 prices at 0
//! - Missing multipliers are 1.0; a missing base cell is 0

use crate::catalog::tables::{find_multiplier, BracketFallback, DiamondTable};
use crate::models::event::{EventLog, PricingEvent};
use crate::models::stone::DiamondQuality;
use crate::pricing::bracket::{first_match, CaratBracket};

/// Pick the carat bracket for `carats`, applying the table's fallback on a miss.
pub fn resolve_carat_bracket<'a>(
    table: &'a DiamondTable,
    carats: f64,
    line: usize,
    events: &mut EventLog,
) -> Option<&'a CaratBracket> {
    if let Some(bracket) = first_match(&table.carat_brackets, carats) {
        return Some(bracket);
    }

    let used = match table.fallback {
        BracketFallback::FirstBracket => table.carat_brackets.first(),
        BracketFallback::Zero => None,
    };
    events.log(PricingEvent::CaratBracketFallback {
        line,
        carats,
        used: used.map(|b| b.key.clone()),
    });
    used
}

/// Base price lookup with no defaults applied
pub fn base_price(table: &DiamondTable, bracket: &CaratBracket, quality: &DiamondQuality) -> Option<f64> {
    table
        .base
        .get(&bracket.key)
        .and_then(|by_color| by_color.get(&quality.color))
        .and_then(|by_clarity| by_clarity.get(&quality.clarity))
        .copied()
}

/// USD price per carat for a diamond line.
///
/// # Example
/// ```
/// use jewelry_quote_core_rs::catalog::PricingTables;
/// use jewelry_quote_core_rs::models::{DiamondQuality, EventLog};
/// use jewelry_quote_core_rs::pricing::diamond::diamond_price_per_carat;
///
/// let tables = PricingTables::default();
/// let mut events = EventLog::new();
/// let price = diamond_price_per_carat(&tables.diamond, 1.0, &DiamondQuality::default(), 0, &mut events);
/// assert!((price - 6480.0).abs() < 1e-9);
/// ```
pub fn diamond_price_per_carat(
    table: &DiamondTable,
    carats: f64,
    quality: &DiamondQuality,
    line: usize,
    events: &mut EventLog,
) -> f64 {
    if !(carats > 0.0) {
        return 0.0;
    }

    let bracket = match resolve_carat_bracket(table, carats, line, events) {
        Some(bracket) => bracket,
        None => return 0.0,
    };

    let base = match base_price(table, bracket, quality) {
        Some(price) => price,
        None => {
            events.log(PricingEvent::DiamondPriceMissing {
                line,
                bracket: bracket.key.clone(),
                color: quality.color,
                clarity: quality.clarity,
            });
            return 0.0;
        }
    };

    let cut = find_multiplier(&table.cuts, &quality.cut).unwrap_or_else(|| {
        events.log(PricingEvent::MultiplierDefaulted {
            line,
            table: "cut".to_string(),
            key: quality.cut.label().to_string(),
        });
        1.0
    });
    let fluorescence = find_multiplier(&table.fluorescence, &quality.fluorescence).unwrap_or_else(|| {
        events.log(PricingEvent::MultiplierDefaulted {
            line,
            table: "fluorescence".to_string(),
            key: quality.fluorescence.label().to_string(),
        });
        1.0
    });

    base * cut * fluorescence
}
