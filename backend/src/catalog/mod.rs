//! Pricing catalog: key spaces, table schema, built-in defaults, overrides

pub mod config;
pub mod defaults;
pub mod keys;
pub mod tables;

pub use config::{CatalogError, PricingCatalog, PricingConfig, PricingView};
pub use defaults::{BASE_CURRENCY, SUPPORTED_CURRENCIES};
pub use tables::{
    AdvancedGemTable, BracketFallback, BracketPrice, ColoredGemEntry, DiamondTable, GradePrice,
    MetalEntry, Multiplier, PricingTables, SmallStoneTable, SpecialColorTable,
};
