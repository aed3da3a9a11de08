//! Domain models for the quote engine

pub mod event;
pub mod labor;
pub mod metal;
pub mod packaging;
pub mod quote;
pub mod stone;
pub mod totals;

// Re-exports
pub use event::{EventLog, PricingEvent};
pub use labor::LaborSpec;
pub use metal::MetalSpec;
pub use packaging::PackagingSpec;
pub use quote::{quote_number, QuoteState};
pub use stone::{ColoredGemQuality, DiamondQuality, SmallStone, StoneKind, StoneLine, WeightSpec};
pub use totals::ComputedTotals;
