//! Precious metal cost
//!
//! `subtotal = weight × (1 + wastage) × price_per_gram + extra_fee`,
//! clamped at 0. An out-of-range result prices at 0 and is logged.
//!
//! # Critical Invariants
//!
//! - Auto catalog and spot prices are converted; manual values are not
//! - A spot rate is used only when it is finite and positive
//! - The entered extra fee is in the display currency; catalog fees
//!   (alloy fee, special-color surcharge) are converted

use crate::catalog::keys::{MetalFamily, MetalPurity, PriceMode};
use crate::catalog::tables::MetalEntry;
use crate::catalog::PricingView;
use crate::core::to_cents;
use crate::models::event::{EventLog, PricingEvent};
use crate::models::metal::MetalSpec;
use crate::pricing::currency::CurrencyAdjuster;
use serde::{Deserialize, Serialize};

/// Spot prices in USD per gram of fine metal
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetalSpotRates {
    pub gold: f64,
    pub silver: f64,
    pub platinum: f64,
}

impl MetalSpotRates {
    /// Usable spot price for a family, if any
    pub fn for_family(&self, family: MetalFamily) -> Option<f64> {
        let rate = match family {
            MetalFamily::Gold => self.gold,
            MetalFamily::Silver => self.silver,
            MetalFamily::Platinum => self.platinum,
        };
        (rate.is_finite() && rate > 0.0).then_some(rate)
    }
}

/// Where the price per gram came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    Catalog,
    Spot,
    Manual,
}

/// Resolved metal figures, display currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetalCost {
    pub purity: MetalPurity,
    pub name: String,
    pub weight_g: f64,
    pub price_per_gram: f64,
    pub loss_rate_percent: f64,
    pub extra_fee: f64,
    pub source: PriceSource,
    pub subtotal: f64,
    pub subtotal_cents: i64,
}

/// Catalog entry for a purity, or the first entry when it is absent
pub fn metal_entry<'a>(
    view: &PricingView<'a>,
    purity: MetalPurity,
    events: &mut EventLog,
) -> Option<(MetalPurity, &'a MetalEntry)> {
    if let Some(entry) = view.metals.get(&purity) {
        return Some((purity, entry));
    }
    let first = view.metals.iter().next().map(|(key, entry)| (*key, entry));
    events.log(PricingEvent::MetalEntryMissing {
        purity,
        used: first.map(|(key, _)| key),
    });
    first
}

pub fn metal_cost(
    view: &PricingView<'_>,
    spec: &MetalSpec,
    fx: &CurrencyAdjuster,
    spot: Option<&MetalSpotRates>,
    events: &mut EventLog,
) -> MetalCost {
    let entry = metal_entry(view, spec.purity, events);
    let weight_g = spec.weight_g.value();

    let (price_per_gram, loss_rate_percent, source) = match spec.price_mode {
        PriceMode::Manual => (spec.price_per_gram.value(), spec.loss_rate.value(), PriceSource::Manual),
        PriceMode::Auto => match entry {
            Some((purity, entry)) => {
                let family = purity.family();
                match spot.map(|s| s.for_family(family)) {
                    Some(Some(rate)) => {
                        events.log(PricingEvent::SpotRateApplied {
                            family,
                            spot_per_gram: rate,
                            purity_fraction: entry.purity_fraction,
                        });
                        (
                            fx.convert(rate * entry.purity_fraction),
                            entry.wastage_percent,
                            PriceSource::Spot,
                        )
                    }
                    Some(None) => {
                        events.log(PricingEvent::SpotRateUnavailable { family });
                        (fx.convert(entry.price_per_gram), entry.wastage_percent, PriceSource::Catalog)
                    }
                    None => (fx.convert(entry.price_per_gram), entry.wastage_percent, PriceSource::Catalog),
                }
            }
            None => (0.0, 0.0, PriceSource::Catalog),
        },
    };

    let alloy_fee = entry.map(|(_, e)| e.extra_fee).unwrap_or(0.0);
    let special_fee = match spec.special_color {
        Some(color) if view.special_color.colors.contains(&color) => view.special_color.extra_fee,
        _ => 0.0,
    };
    let extra_fee = spec.extra_fee.value() + fx.convert(alloy_fee + special_fee);

    let raw = weight_g * (1.0 + loss_rate_percent / 100.0) * price_per_gram + extra_fee;
    let subtotal = events.bound_amount(raw, "metal", None).max(0.0);

    tracing::trace!(purity = ?spec.purity, ?source, price_per_gram, subtotal, "priced metal");

    MetalCost {
        purity: entry.map(|(key, _)| key).unwrap_or(spec.purity),
        name: entry.map(|(_, e)| e.name.clone()).unwrap_or_default(),
        weight_g,
        price_per_gram,
        loss_rate_percent,
        extra_fee,
        source,
        subtotal,
        subtotal_cents: to_cents(subtotal),
    }
}
