//! Catalog defaults and the override layer
//!
//! A `PricingCatalog` holds the immutable defaults. A `PricingConfig` has the
//! same sections, each optional; a present section replaces the catalog's
//! section wholesale. `PricingView` is the resolved, borrowed combination
//! that every pricing call reads from.
//!
//! # Example
//!
//! ```
//! use jewelry_quote_core_rs::catalog::{PricingCatalog, PricingConfig, PricingView};
//! use jewelry_quote_core_rs::catalog::keys::LaborTier;
//! use std::collections::BTreeMap;
//!
//! let catalog = PricingCatalog::builtin();
//! let config = PricingConfig::default()
//!     .with_labor(BTreeMap::from([(LaborTier::Simple, 25.0)]));
//!
//! let view = PricingView::resolve(&catalog, Some(&config));
//! assert_eq!(view.labor.get(&LaborTier::Simple), Some(&25.0));
//! assert_eq!(view.labor.get(&LaborTier::Middle), None);
//! ```

use crate::catalog::keys::{LaborTier, MetalPurity, Treatment};
use crate::catalog::tables::{
    AdvancedGemTable, ColoredGemEntry, DiamondTable, MetalEntry, Multiplier, PricingTables,
    SmallStoneTable, SpecialColorTable,
};
use crate::pricing::colored::TreatmentPolicy;
use crate::pricing::interpolate::Breakpoint;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors loading catalog or override data
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse pricing data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid pricing table: {0}")]
    Invalid(String),
}

// ============================================================================
// Catalog
// ============================================================================

/// Immutable default tables
///
/// Deserializing goes through [`PricingCatalog::from_tables`], so a catalog
/// read by any serde path has passed the structural checks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "PricingTables", into = "PricingTables")]
pub struct PricingCatalog {
    tables: PricingTables,
}

impl PricingCatalog {
    /// The built-in sample catalog
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Wrap a complete table set after checking its structure.
    pub fn from_tables(tables: PricingTables) -> Result<Self, CatalogError> {
        validate_breakpoints(&tables.melee_mm_to_ct)?;
        validate_diamond(&tables.diamond)?;
        Ok(Self { tables })
    }

    /// Parse a complete table set from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let tables: PricingTables = serde_json::from_str(json)?;
        Self::from_tables(tables)
    }

    pub fn tables(&self) -> &PricingTables {
        &self.tables
    }
}

impl TryFrom<PricingTables> for PricingCatalog {
    type Error = CatalogError;

    fn try_from(tables: PricingTables) -> Result<Self, Self::Error> {
        Self::from_tables(tables)
    }
}

impl From<PricingCatalog> for PricingTables {
    fn from(catalog: PricingCatalog) -> Self {
        catalog.tables
    }
}

// ============================================================================
// Overrides
// ============================================================================

/// Section-wise overrides of the catalog
///
/// Absent sections (and absent JSON keys) fall through to the catalog.
/// Deserializing runs the same structural checks as [`PricingConfig::from_json`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "ConfigDocument")]
pub struct PricingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diamond: Option<DiamondTable>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub colored_gems: Option<Vec<ColoredGemEntry>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatments: Option<Vec<Multiplier<Treatment>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_gems: Option<AdvancedGemTable>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_policy: Option<TreatmentPolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_stones: Option<SmallStoneTable>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metals: Option<BTreeMap<MetalPurity, MetalEntry>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_color: Option<SpecialColorTable>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labor: Option<BTreeMap<LaborTier, f64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub melee_mm_to_ct: Option<Vec<Breakpoint>>,
}

/// Override document as written, before the structural checks
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigDocument {
    diamond: Option<DiamondTable>,
    colored_gems: Option<Vec<ColoredGemEntry>>,
    treatments: Option<Vec<Multiplier<Treatment>>>,
    advanced_gems: Option<AdvancedGemTable>,
    treatment_policy: Option<TreatmentPolicy>,
    small_stones: Option<SmallStoneTable>,
    metals: Option<BTreeMap<MetalPurity, MetalEntry>>,
    special_color: Option<SpecialColorTable>,
    labor: Option<BTreeMap<LaborTier, f64>>,
    melee_mm_to_ct: Option<Vec<Breakpoint>>,
}

impl TryFrom<ConfigDocument> for PricingConfig {
    type Error = CatalogError;

    fn try_from(doc: ConfigDocument) -> Result<Self, Self::Error> {
        if let Some(table) = &doc.melee_mm_to_ct {
            validate_breakpoints(table)?;
        }
        if let Some(diamond) = &doc.diamond {
            validate_diamond(diamond)?;
        }
        Ok(Self {
            diamond: doc.diamond,
            colored_gems: doc.colored_gems,
            treatments: doc.treatments,
            advanced_gems: doc.advanced_gems,
            treatment_policy: doc.treatment_policy,
            small_stones: doc.small_stones,
            metals: doc.metals,
            special_color: doc.special_color,
            labor: doc.labor,
            melee_mm_to_ct: doc.melee_mm_to_ct,
        })
    }
}

impl PricingConfig {
    /// Parse an override document. Unknown sections are ignored.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc: ConfigDocument = serde_json::from_str(json)?;
        Self::try_from(doc)
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn with_diamond(mut self, diamond: DiamondTable) -> Self {
        self.diamond = Some(diamond);
        self
    }

    pub fn with_colored_gems(mut self, entries: Vec<ColoredGemEntry>) -> Self {
        self.colored_gems = Some(entries);
        self
    }

    pub fn with_treatments(mut self, treatments: Vec<Multiplier<Treatment>>) -> Self {
        self.treatments = Some(treatments);
        self
    }

    pub fn with_advanced_gems(mut self, table: AdvancedGemTable) -> Self {
        self.advanced_gems = Some(table);
        self
    }

    pub fn with_treatment_policy(mut self, policy: TreatmentPolicy) -> Self {
        self.treatment_policy = Some(policy);
        self
    }

    pub fn with_small_stones(mut self, table: SmallStoneTable) -> Self {
        self.small_stones = Some(table);
        self
    }

    pub fn with_metals(mut self, metals: BTreeMap<MetalPurity, MetalEntry>) -> Self {
        self.metals = Some(metals);
        self
    }

    pub fn with_special_color(mut self, table: SpecialColorTable) -> Self {
        self.special_color = Some(table);
        self
    }

    pub fn with_labor(mut self, labor: BTreeMap<LaborTier, f64>) -> Self {
        self.labor = Some(labor);
        self
    }

    pub fn with_melee_table(mut self, table: Vec<Breakpoint>) -> Self {
        self.melee_mm_to_ct = Some(table);
        self
    }
}

// ============================================================================
// Resolved view
// ============================================================================

/// Effective tables for one pricing run: each section from the override
/// when present, otherwise from the catalog.
#[derive(Debug, Clone, Copy)]
pub struct PricingView<'a> {
    pub diamond: &'a DiamondTable,
    pub colored_gems: &'a [ColoredGemEntry],
    pub treatments: &'a [Multiplier<Treatment>],
    pub advanced_gems: &'a AdvancedGemTable,
    pub treatment_policy: &'a TreatmentPolicy,
    pub small_stones: &'a SmallStoneTable,
    pub metals: &'a BTreeMap<MetalPurity, MetalEntry>,
    pub special_color: &'a SpecialColorTable,
    pub labor: &'a BTreeMap<LaborTier, f64>,
    pub melee_mm_to_ct: &'a [Breakpoint],
}

impl<'a> PricingView<'a> {
    pub fn resolve(catalog: &'a PricingCatalog, config: Option<&'a PricingConfig>) -> Self {
        let base = catalog.tables();

        Self {
            diamond: config.and_then(|c| c.diamond.as_ref()).unwrap_or(&base.diamond),
            colored_gems: config
                .and_then(|c| c.colored_gems.as_deref())
                .unwrap_or(&base.colored_gems),
            treatments: config
                .and_then(|c| c.treatments.as_deref())
                .unwrap_or(&base.treatments),
            advanced_gems: config
                .and_then(|c| c.advanced_gems.as_ref())
                .unwrap_or(&base.advanced_gems),
            treatment_policy: config
                .and_then(|c| c.treatment_policy.as_ref())
                .unwrap_or(&base.treatment_policy),
            small_stones: config
                .and_then(|c| c.small_stones.as_ref())
                .unwrap_or(&base.small_stones),
            metals: config.and_then(|c| c.metals.as_ref()).unwrap_or(&base.metals),
            special_color: config
                .and_then(|c| c.special_color.as_ref())
                .unwrap_or(&base.special_color),
            labor: config.and_then(|c| c.labor.as_ref()).unwrap_or(&base.labor),
            melee_mm_to_ct: config
                .and_then(|c| c.melee_mm_to_ct.as_deref())
                .unwrap_or(&base.melee_mm_to_ct),
        }
    }

    /// Owned copy of the effective tables (used for hashing and export)
    pub fn to_tables(&self) -> PricingTables {
        PricingTables {
            diamond: self.diamond.clone(),
            colored_gems: self.colored_gems.to_vec(),
            treatments: self.treatments.to_vec(),
            advanced_gems: self.advanced_gems.clone(),
            treatment_policy: *self.treatment_policy,
            small_stones: self.small_stones.clone(),
            metals: self.metals.clone(),
            special_color: self.special_color.clone(),
            labor: self.labor.clone(),
            melee_mm_to_ct: self.melee_mm_to_ct.to_vec(),
        }
    }
}

// ============================================================================
// Structural checks
// ============================================================================

fn validate_breakpoints(table: &[Breakpoint]) -> Result<(), CatalogError> {
    if table.iter().any(|b| !b.size.is_finite() || !b.value.is_finite()) {
        return Err(CatalogError::Invalid(
            "interpolation breakpoints must be finite".to_string(),
        ));
    }
    if let Some(pair) = table.windows(2).find(|w| w[0].size >= w[1].size) {
        return Err(CatalogError::Invalid(format!(
            "interpolation breakpoints must ascend ({} then {})",
            pair[0].size, pair[1].size
        )));
    }
    Ok(())
}

fn validate_diamond(table: &DiamondTable) -> Result<(), CatalogError> {
    for bracket in &table.carat_brackets {
        if !(bracket.min <= bracket.max) {
            return Err(CatalogError::Invalid(format!(
                "carat bracket '{}' has min {} above max {}",
                bracket.key, bracket.min, bracket.max
            )));
        }
    }
    Ok(())
}
