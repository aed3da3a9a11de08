//! Pricing components
//!
//! Each component is a pure function of its inputs plus the caller's
//! `EventLog`. None of them fail; missing table data resolves to a
//! fail-soft default and is logged.

pub mod bracket;
pub mod colored;
pub mod currency;
pub mod diamond;
pub mod interpolate;
pub mod labor;
pub mod line_item;
pub mod metal;
pub mod small_stone;

pub use bracket::{first_match, Bracket, BracketParseError, CaratBracket, WeightBracket};
pub use colored::TreatmentPolicy;
pub use currency::{CurrencyAdjuster, CurrencyRateTable};
pub use interpolate::{interpolate, Breakpoint};
pub use line_item::{price_line, resolve_weight, LinePricing, ResolvedWeight};
pub use metal::{metal_cost, MetalCost, MetalSpotRates, PriceSource};
pub use small_stone::PricingBasis;
