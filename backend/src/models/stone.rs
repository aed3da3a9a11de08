//! Stone line model
//!
//! One gemstone entry of a quote: its role, what it is, how its weight is
//! measured, and whether its price comes from the tables or is typed in.
//! The pricing engine never mutates a line; resolved prices are returned
//! separately in `LinePricing`.

use crate::catalog::keys::{
    CutGrade, DiamondClarity, DiamondColor, Fluorescence, GemColor, GemGrade, GemKind, MeleeQuality,
    PriceMode, SettingMethod, StoneRole, Treatment,
};
use crate::core::NumericField;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Quality descriptors
// ============================================================================

/// Diamond 4C selection (carat comes from the weight spec)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiamondQuality {
    pub color: DiamondColor,
    pub clarity: DiamondClarity,
    #[serde(default)]
    pub cut: CutGrade,
    #[serde(default)]
    pub fluorescence: Fluorescence,
}

impl Default for DiamondQuality {
    fn default() -> Self {
        Self {
            color: DiamondColor::GToH,
            clarity: DiamondClarity::Vs,
            cut: CutGrade::Excellent,
            fluorescence: Fluorescence::None,
        }
    }
}

/// Colored gem selection
///
/// With `color` set (and applicable to `kind`), pricing uses the
/// specific-color bracket table; otherwise the generic grade table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColoredGemQuality {
    pub kind: GemKind,
    pub grade: GemGrade,
    #[serde(default)]
    pub treatment: Treatment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<GemColor>,
}

impl Default for ColoredGemQuality {
    fn default() -> Self {
        Self {
            kind: GemKind::Sapphire,
            grade: GemGrade::Aa,
            treatment: Treatment::NaturalUnknown,
            color: None,
        }
    }
}

/// Commodity side stones priced from flat rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stone", rename_all = "snake_case")]
pub enum SmallStone {
    /// Standard-cut melee diamond, per carat
    DiamondStandard {
        #[serde(default)]
        quality: MeleeQuality,
    },
    /// Single-cut melee diamond, per carat
    DiamondSingleCut,
    /// Zircon, per piece
    Zircon,
    /// Moissanite, per piece
    Moissanite {
        #[serde(default)]
        setting: SettingMethod,
    },
}

impl SmallStone {
    pub fn label(&self) -> String {
        match self {
            SmallStone::DiamondStandard { quality } => format!("Melee Diamond ({})", quality.label()),
            SmallStone::DiamondSingleCut => "Single Cut Diamond".to_string(),
            SmallStone::Zircon => "Zircon".to_string(),
            SmallStone::Moissanite { setting } => format!("Moissanite ({})", setting.label()),
        }
    }

    /// True when priced by the piece rather than by weight
    pub fn per_piece(&self) -> bool {
        matches!(self, SmallStone::Zircon | SmallStone::Moissanite { .. })
    }
}

/// Material category of a line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", content = "quality", rename_all = "snake_case")]
pub enum StoneKind {
    Diamond(DiamondQuality),
    ColoredGem(ColoredGemQuality),
    SmallStone(SmallStone),
}

impl StoneKind {
    /// Display name of the material
    pub fn type_label(&self) -> String {
        match self {
            StoneKind::Diamond(_) => "Diamond".to_string(),
            StoneKind::ColoredGem(q) => q.kind.label().to_string(),
            StoneKind::SmallStone(s) => s.label(),
        }
    }
}

// ============================================================================
// Weight
// ============================================================================

/// How a line's carat weight is entered. Exactly one mode applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum WeightSpec {
    /// Aggregate weight of all stones on the line
    Total {
        carats: NumericField,
        #[serde(default)]
        count: NumericField,
    },
    /// Weight of one stone times the count
    PerUnit {
        carats_each: NumericField,
        count: NumericField,
    },
    /// Round-stone diameter, converted to carats per stone, times the count
    Diameter { mm: NumericField, count: NumericField },
}

impl WeightSpec {
    pub fn count(&self) -> &NumericField {
        match self {
            WeightSpec::Total { count, .. }
            | WeightSpec::PerUnit { count, .. }
            | WeightSpec::Diameter { count, .. } => count,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeightSpec::Total { .. } => "Total Weight (ct)",
            WeightSpec::PerUnit { .. } => "Weight Each × Qty (ct)",
            WeightSpec::Diameter { .. } => "Diameter(mm) × Qty (Est. ct)",
        }
    }

    /// Weight as entered, for the text summary
    pub fn describe(&self) -> String {
        match self {
            WeightSpec::Total { carats, .. } => format!("{}ct", carats.or_zero()),
            WeightSpec::PerUnit { carats_each, count } => {
                format!("{}×{}ct", carats_each.or_zero(), count.or_zero())
            }
            WeightSpec::Diameter { mm, count } => {
                format!("{}mm×{} (Est. ct)", mm.or_zero(), count.or_zero())
            }
        }
    }
}

// ============================================================================
// Stone line
// ============================================================================

/// One gemstone entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoneLine {
    pub id: String,
    pub role: StoneRole,
    pub kind: StoneKind,
    pub weight: WeightSpec,
    #[serde(default)]
    pub price_mode: PriceMode,

    /// Unit price in the display currency, used in manual mode
    #[serde(default)]
    pub manual_price: NumericField,
}

impl StoneLine {
    /// New line with a fresh id, blank total weight and auto pricing.
    ///
    /// Main stones start with a count of 1, side stones with 0.
    pub fn new(role: StoneRole, kind: StoneKind) -> Self {
        let count = match role {
            StoneRole::Main => "1",
            StoneRole::Side => "0",
        };
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            kind,
            weight: WeightSpec::Total {
                carats: NumericField::empty(),
                count: NumericField::from(count),
            },
            price_mode: PriceMode::Auto,
            manual_price: NumericField::empty(),
        }
    }

    /// Colored gem line with default quality (sapphire, AA, undisclosed treatment)
    pub fn colored_gem(role: StoneRole) -> Self {
        Self::new(role, StoneKind::ColoredGem(ColoredGemQuality::default()))
    }

    /// Diamond line with default quality (G-H, VS, Excellent, no fluorescence)
    pub fn diamond(role: StoneRole) -> Self {
        Self::new(role, StoneKind::Diamond(DiamondQuality::default()))
    }

    /// Side-stone line for a commodity stone, measured by diameter
    pub fn small_stone(stone: SmallStone) -> Self {
        let mut line = Self::new(StoneRole::Side, StoneKind::SmallStone(stone));
        line.weight = WeightSpec::Diameter {
            mm: NumericField::empty(),
            count: NumericField::from("0"),
        };
        line
    }

    pub fn with_weight(mut self, weight: WeightSpec) -> Self {
        self.weight = weight;
        self
    }

    /// Switch to manual pricing at `price` per unit
    pub fn with_manual_price(mut self, price: impl Into<NumericField>) -> Self {
        self.price_mode = PriceMode::Manual;
        self.manual_price = price.into();
        self
    }

    /// Quality detail for the text summary
    pub fn detail(&self) -> String {
        match &self.kind {
            StoneKind::Diamond(q) => format!(
                "4C: {} / {} / {} | Fluor:{}",
                q.color.label(),
                q.clarity.label(),
                q.cut.label(),
                q.fluorescence.label()
            ),
            StoneKind::ColoredGem(q) => {
                let mut detail = format!("Grade:{} | Treat:{}", q.grade.label(), q.treatment.label());
                if let Some(color) = q.color {
                    detail.push_str(&format!(" | Color:{}", color.label()));
                }
                detail
            }
            StoneKind::SmallStone(s) => format!("Small:{}", s.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_counts_by_role() {
        let main = StoneLine::colored_gem(StoneRole::Main);
        let side = StoneLine::diamond(StoneRole::Side);
        assert_eq!(main.weight.count().as_str(), "1");
        assert_eq!(side.weight.count().as_str(), "0");
        assert_ne!(main.id, side.id);
    }

    #[test]
    fn test_weight_description() {
        let total = WeightSpec::Total {
            carats: "1.2".into(),
            count: "1".into(),
        };
        assert_eq!(total.describe(), "1.2ct");

        let each = WeightSpec::PerUnit {
            carats_each: "".into(),
            count: "4".into(),
        };
        assert_eq!(each.describe(), "0×4ct");

        let mm = WeightSpec::Diameter {
            mm: "2.0".into(),
            count: "10".into(),
        };
        assert_eq!(mm.describe(), "2.0mm×10 (Est. ct)");
    }

    #[test]
    fn test_detail_text() {
        let line = StoneLine::diamond(StoneRole::Main);
        assert_eq!(line.detail(), "4C: G-H / VS / Excellent | Fluor:None");

        let mut gem = StoneLine::colored_gem(StoneRole::Main);
        if let StoneKind::ColoredGem(q) = &mut gem.kind {
            q.color = Some(GemColor::RoyalBlue);
            q.treatment = Treatment::Heated;
        }
        assert_eq!(gem.detail(), "Grade:AA | Treat:Heated | Color:Royal Blue");
    }

    #[test]
    fn test_stone_line_json_shape() {
        let line = StoneLine::small_stone(SmallStone::Moissanite {
            setting: SettingMethod::HandSet,
        });
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["kind"]["category"], "small_stone");
        assert_eq!(json["kind"]["quality"]["stone"], "moissanite");
        assert_eq!(json["weight"]["mode"], "diameter");

        let back: StoneLine = serde_json::from_value(json).unwrap();
        assert_eq!(back, line);
    }
}
