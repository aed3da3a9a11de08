//! Pricing table schema
//!
//! `PricingTables` is the complete set of reference data the engine reads.
//! Built-in sample values live in `defaults.rs`; overrides use the same
//! section types (see `config.rs`).
//!
//! All catalog prices are USD. The engine converts auto prices into the
//! display currency; manual prices are taken as entered.

use crate::catalog::keys::{
    AdvancedGrade, CutGrade, DiamondClarity, DiamondColor, Fluorescence, GemColor, GemGrade, GemKind,
    LaborTier, MeleeQuality, MetalPurity, SettingMethod, SpecialColor, Treatment,
};
use crate::pricing::bracket::{CaratBracket, WeightBracket};
use crate::pricing::colored::TreatmentPolicy;
use crate::pricing::interpolate::Breakpoint;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A scalar multiplier attached to one key of a closed key space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Multiplier<K> {
    pub key: K,
    pub mult: f64,
}

impl<K: PartialEq> Multiplier<K> {
    pub fn new(key: K, mult: f64) -> Self {
        Self { key, mult }
    }
}

/// Look up the multiplier for `key`, if the list carries one.
pub fn find_multiplier<K: PartialEq>(list: &[Multiplier<K>], key: &K) -> Option<f64> {
    list.iter().find(|m| &m.key == key).map(|m| m.mult)
}

// ============================================================================
// Diamonds
// ============================================================================

/// What the diamond table does when no carat bracket matches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketFallback {
    /// Price from the first-defined bracket
    #[default]
    FirstBracket,
    /// Price is 0
    Zero,
}

/// `base[bracket_key][color][clarity]` → USD per carat
pub type DiamondBaseTable = BTreeMap<String, BTreeMap<DiamondColor, BTreeMap<DiamondClarity, f64>>>;

/// Four-axis diamond price table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiamondTable {
    /// Candidate carat ranges, evaluated in order
    pub carat_brackets: Vec<CaratBracket>,

    /// Base price per carat by bracket key, color group, clarity group
    pub base: DiamondBaseTable,

    pub cuts: Vec<Multiplier<CutGrade>>,

    pub fluorescence: Vec<Multiplier<Fluorescence>>,

    #[serde(default)]
    pub fallback: BracketFallback,
}

// ============================================================================
// Colored gems
// ============================================================================

/// Base price for one grade tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradePrice {
    pub grade: GemGrade,
    pub price: f64,
}

/// Generic per-species price list, used when no specific color is chosen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColoredGemEntry {
    pub kind: GemKind,
    pub grades: Vec<GradePrice>,
}

impl ColoredGemEntry {
    pub fn price(&self, grade: GemGrade) -> Option<f64> {
        self.grades.iter().find(|g| g.grade == grade).map(|g| g.price)
    }
}

/// Price for one per-stone weight bracket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketPrice {
    pub bracket: WeightBracket,
    pub price: f64,
}

/// `advanced[color][grade]` → bracketed USD per carat (heated anchor values)
pub type AdvancedGemTable = BTreeMap<GemColor, BTreeMap<AdvancedGrade, Vec<BracketPrice>>>;

// ============================================================================
// Small stones
// ============================================================================

/// Flat prices for commodity side stones
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmallStoneTable {
    /// Standard-cut melee diamond, USD per carat by quality
    pub diamond_standard: BTreeMap<MeleeQuality, f64>,

    /// Single-cut melee diamond, USD per carat
    pub diamond_single_cut: f64,

    /// Zircon, USD per piece
    pub zircon_per_piece: f64,

    /// Moissanite, USD per piece by setting method
    pub moissanite: BTreeMap<SettingMethod, f64>,
}

// ============================================================================
// Metals
// ============================================================================

/// Reference data for one purity key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetalEntry {
    pub name: String,

    /// Production loss as a percentage (15 = 15%)
    pub wastage_percent: f64,

    /// Static USD price per gram
    pub price_per_gram: f64,

    /// Flat USD fee for this alloy
    #[serde(default)]
    pub extra_fee: f64,

    /// Fine-metal fraction, used with spot prices (0.75 for 18k)
    pub purity_fraction: f64,
}

/// Surcharge for special colored-gold finishes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialColorTable {
    pub colors: Vec<SpecialColor>,
    pub extra_fee: f64,
}

// ============================================================================
// Complete table set
// ============================================================================

/// Every table the engine reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTables {
    pub diamond: DiamondTable,

    /// Generic 4-tier grade prices per species
    pub colored_gems: Vec<ColoredGemEntry>,

    /// Generic treatment multipliers
    pub treatments: Vec<Multiplier<Treatment>>,

    /// Specific-color bracket tables
    pub advanced_gems: AdvancedGemTable,

    /// How advanced-table prices are rebased across treatments
    pub treatment_policy: TreatmentPolicy,

    pub small_stones: SmallStoneTable,

    pub metals: BTreeMap<MetalPurity, MetalEntry>,

    pub special_color: SpecialColorTable,

    /// Making fee by complexity tier, USD
    pub labor: BTreeMap<LaborTier, f64>,

    /// Melee diameter (mm) → carats per stone
    pub melee_mm_to_ct: Vec<Breakpoint>,
}
