//! Stone line pricing
//!
//! Resolves a line's weight, picks its unit price (manual, or from the
//! tables and converted) and forms the rounded subtotal.
//!
//! # Critical Invariants
//!
//! - Manual unit prices are used verbatim and never converted
//! - Auto unit prices keep full precision; only the subtotal is rounded
//! - `subtotal = quantity × unit_price`, rounded to cents per line
//! - A subtotal outside the money range prices at 0 and is logged
//! - Bracket selection for colored gems uses the per-stone weight; diamonds
//!   use the line's total weight

use crate::catalog::keys::PriceMode;
use crate::catalog::PricingView;
use crate::core::to_cents;
use crate::models::event::EventLog;
use crate::models::stone::{StoneKind, StoneLine, WeightSpec};
use crate::pricing::colored::colored_gem_price_per_carat;
use crate::pricing::currency::CurrencyAdjuster;
use crate::pricing::diamond::diamond_price_per_carat;
use crate::pricing::interpolate::{interpolate, Breakpoint};
use crate::pricing::small_stone::{small_stone_price, PricingBasis};
use serde::{Deserialize, Serialize};

/// Weight of a line after applying its weight mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedWeight {
    pub total_carats: f64,

    /// Weight of one stone, used for per-stone brackets
    pub per_stone_carats: f64,

    pub count: f64,
}

/// Resolve total and per-stone carats.
///
/// In total mode the per-stone weight is `total / count`, or the total
/// itself when no positive count is entered.
pub fn resolve_weight(spec: &WeightSpec, melee_table: &[Breakpoint]) -> ResolvedWeight {
    match spec {
        WeightSpec::Total { carats, count } => {
            let total = carats.value();
            let count = count.value();
            let per_stone = if count > 0.0 { total / count } else { total };
            ResolvedWeight {
                total_carats: total,
                per_stone_carats: per_stone,
                count,
            }
        }
        WeightSpec::PerUnit { carats_each, count } => {
            let each = carats_each.value();
            let count = count.value();
            ResolvedWeight {
                total_carats: each * count,
                per_stone_carats: each,
                count,
            }
        }
        WeightSpec::Diameter { mm, count } => {
            let each = interpolate(melee_table, mm.value());
            let count = count.value();
            ResolvedWeight {
                total_carats: each * count,
                per_stone_carats: each,
                count,
            }
        }
    }
}

/// Priced stone line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePricing {
    pub index: usize,
    pub id: String,
    pub weight: ResolvedWeight,
    pub basis: PricingBasis,

    /// Carats or pieces, per `basis`
    pub quantity: f64,

    /// Display-currency price per carat or per piece
    pub unit_price: f64,

    pub price_mode: PriceMode,

    /// Unrounded `quantity × unit_price`
    pub subtotal: f64,

    pub subtotal_cents: i64,
}

/// USD auto price and basis for a line, before conversion
pub fn auto_unit_price(
    view: &PricingView<'_>,
    line: &StoneLine,
    weight: &ResolvedWeight,
    index: usize,
    events: &mut EventLog,
) -> (f64, PricingBasis) {
    match &line.kind {
        StoneKind::Diamond(quality) => (
            diamond_price_per_carat(view.diamond, weight.total_carats, quality, index, events),
            PricingBasis::PerCarat,
        ),
        StoneKind::ColoredGem(quality) => (
            colored_gem_price_per_carat(view, quality, weight.per_stone_carats, index, events),
            PricingBasis::PerCarat,
        ),
        StoneKind::SmallStone(stone) => {
            let price = small_stone_price(view.small_stones, stone, index, events);
            (price.unit_price, price.basis)
        }
    }
}

/// Price one line.
pub fn price_line(
    view: &PricingView<'_>,
    line: &StoneLine,
    index: usize,
    fx: &CurrencyAdjuster,
    events: &mut EventLog,
) -> LinePricing {
    let weight = resolve_weight(&line.weight, view.melee_mm_to_ct);

    let (unit_price, basis) = match line.price_mode {
        PriceMode::Manual => {
            let basis = match &line.kind {
                StoneKind::SmallStone(stone) if stone.per_piece() => PricingBasis::PerPiece,
                _ => PricingBasis::PerCarat,
            };
            (line.manual_price.value(), basis)
        }
        PriceMode::Auto => {
            let (usd, basis) = auto_unit_price(view, line, &weight, index, events);
            (fx.convert(usd), basis)
        }
    };

    let quantity = match basis {
        PricingBasis::PerCarat => weight.total_carats,
        PricingBasis::PerPiece => weight.count,
    };
    let subtotal = events.bound_amount(quantity * unit_price, "stone", Some(index));

    tracing::trace!(index, id = %line.id, quantity, unit_price, subtotal, "priced stone line");

    LinePricing {
        index,
        id: line.id.clone(),
        weight,
        basis,
        quantity,
        unit_price,
        price_mode: line.price_mode,
        subtotal,
        subtotal_cents: to_cents(subtotal),
    }
}
