//! Closed key spaces used by the pricing tables
//!
//! Every categorical axis a quote can select on is a fixed enum. Serialized
//! names match the keys used by stored quotes and pricing configs
//! (`"G-H"`, `"IF/VVS"`, `"glass_filled"`, `"18k_yellow"`, ...).

use serde::{Deserialize, Serialize};

/// Stone role within the piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoneRole {
    Main,
    Side,
}

impl StoneRole {
    pub fn label(&self) -> &'static str {
        match self {
            StoneRole::Main => "Main Stone",
            StoneRole::Side => "Side Stone",
        }
    }
}

/// Auto (table-derived) or manual (user-entered) pricing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceMode {
    #[default]
    Auto,
    Manual,
}

impl PriceMode {
    pub fn label(&self) -> &'static str {
        match self {
            PriceMode::Auto => "Auto Price",
            PriceMode::Manual => "Manual Price",
        }
    }
}

// ============================================================================
// Colored gems
// ============================================================================

/// Named colored-gem species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GemKind {
    Sapphire,
    Ruby,
    Emerald,
    Spinel,
    Tourmaline,
}

impl GemKind {
    pub const ALL: [GemKind; 5] = [
        GemKind::Sapphire,
        GemKind::Ruby,
        GemKind::Emerald,
        GemKind::Spinel,
        GemKind::Tourmaline,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GemKind::Sapphire => "Sapphire",
            GemKind::Ruby => "Ruby",
            GemKind::Emerald => "Emerald",
            GemKind::Spinel => "Spinel",
            GemKind::Tourmaline => "Tourmaline",
        }
    }
}

/// Four-tier grade scale used by the generic colored-gem table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GemGrade {
    Commercial,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
    Premium,
}

impl GemGrade {
    pub const ALL: [GemGrade; 4] = [GemGrade::Commercial, GemGrade::Aa, GemGrade::Aaa, GemGrade::Premium];

    pub fn label(&self) -> &'static str {
        match self {
            GemGrade::Commercial => "Commercial",
            GemGrade::Aa => "AA",
            GemGrade::Aaa => "AAA",
            GemGrade::Premium => "Premium",
        }
    }
}

/// Three-tier grade scale used by the specific-color table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AdvancedGrade {
    /// Little impurity
    A,
    /// Front full clean
    #[serde(rename = "AA")]
    Aa,
    /// Best quality
    #[serde(rename = "AAA")]
    Aaa,
}

impl AdvancedGrade {
    pub fn label(&self) -> &'static str {
        match self {
            AdvancedGrade::A => "A",
            AdvancedGrade::Aa => "AA",
            AdvancedGrade::Aaa => "AAA",
        }
    }
}

/// Commercial maps to the lowest advanced tier, Premium to the highest.
impl From<GemGrade> for AdvancedGrade {
    fn from(grade: GemGrade) -> Self {
        match grade {
            GemGrade::Commercial => AdvancedGrade::A,
            GemGrade::Aa => AdvancedGrade::Aa,
            GemGrade::Aaa | GemGrade::Premium => AdvancedGrade::Aaa,
        }
    }
}

/// Specific trade color with its own bracketed price table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GemColor {
    #[serde(rename = "Royal Blue")]
    RoyalBlue,
    #[serde(rename = "Cornflower Blue")]
    CornflowerBlue,
    #[serde(rename = "Pigeon Blood")]
    PigeonBlood,
    #[serde(rename = "Vivid Green")]
    VividGreen,
}

impl GemColor {
    pub fn label(&self) -> &'static str {
        match self {
            GemColor::RoyalBlue => "Royal Blue",
            GemColor::CornflowerBlue => "Cornflower Blue",
            GemColor::PigeonBlood => "Pigeon Blood",
            GemColor::VividGreen => "Vivid Green",
        }
    }

    /// Species this trade color describes
    pub fn gem_kind(&self) -> GemKind {
        match self {
            GemColor::RoyalBlue | GemColor::CornflowerBlue => GemKind::Sapphire,
            GemColor::PigeonBlood => GemKind::Ruby,
            GemColor::VividGreen => GemKind::Emerald,
        }
    }

    pub fn applies_to(&self, kind: GemKind) -> bool {
        self.gem_kind() == kind
    }
}

/// Gemstone treatment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Treatment {
    /// Natural or not disclosed
    #[default]
    NaturalUnknown,
    Heated,
    Unheated,
    Oiled,
    Diffusion,
    GlassFilled,
    FractureFilled,
}

impl Treatment {
    pub fn label(&self) -> &'static str {
        match self {
            Treatment::NaturalUnknown => "Natural (Default)",
            Treatment::Heated => "Heated",
            Treatment::Unheated => "Unheated",
            Treatment::Oiled => "Oiled",
            Treatment::Diffusion => "Diffusion",
            Treatment::GlassFilled => "Glass Filled",
            Treatment::FractureFilled => "Fracture Filled",
        }
    }
}

// ============================================================================
// Diamonds
// ============================================================================

/// Diamond color group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiamondColor {
    #[serde(rename = "D-F")]
    DToF,
    #[serde(rename = "G-H")]
    GToH,
    #[serde(rename = "I-J")]
    IToJ,
    #[serde(rename = "K-M")]
    KToM,
}

impl DiamondColor {
    pub fn label(&self) -> &'static str {
        match self {
            DiamondColor::DToF => "D-F",
            DiamondColor::GToH => "G-H",
            DiamondColor::IToJ => "I-J",
            DiamondColor::KToM => "K-M",
        }
    }
}

/// Diamond clarity group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiamondClarity {
    #[serde(rename = "IF/VVS")]
    IfVvs,
    #[serde(rename = "VS")]
    Vs,
    #[serde(rename = "SI")]
    Si,
    I,
}

impl DiamondClarity {
    pub fn label(&self) -> &'static str {
        match self {
            DiamondClarity::IfVvs => "IF/VVS",
            DiamondClarity::Vs => "VS",
            DiamondClarity::Si => "SI",
            DiamondClarity::I => "I",
        }
    }
}

/// Cut grade, best first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutGrade {
    #[default]
    Excellent,
    VeryGood,
    Good,
    Fair,
}

impl CutGrade {
    pub const ALL: [CutGrade; 4] = [CutGrade::Excellent, CutGrade::VeryGood, CutGrade::Good, CutGrade::Fair];

    /// Ordinal position (0 = best)
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            CutGrade::Excellent => "Excellent",
            CutGrade::VeryGood => "Very Good",
            CutGrade::Good => "Good",
            CutGrade::Fair => "Fair",
        }
    }
}

/// Fluorescence strength, weakest first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fluorescence {
    #[default]
    None,
    Faint,
    Medium,
    Strong,
}

impl Fluorescence {
    pub const ALL: [Fluorescence; 4] = [
        Fluorescence::None,
        Fluorescence::Faint,
        Fluorescence::Medium,
        Fluorescence::Strong,
    ];

    /// Ordinal position (0 = none)
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Fluorescence::None => "None",
            Fluorescence::Faint => "Faint",
            Fluorescence::Medium => "Medium",
            Fluorescence::Strong => "Strong",
        }
    }
}

// ============================================================================
// Small stones
// ============================================================================

/// Quality tier for standard-cut melee diamonds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MeleeQuality {
    #[default]
    #[serde(rename = "SI")]
    Si,
    #[serde(rename = "VS")]
    Vs,
}

impl MeleeQuality {
    pub fn label(&self) -> &'static str {
        match self {
            MeleeQuality::Si => "SI",
            MeleeQuality::Vs => "VS",
        }
    }
}

/// Setting method for moissanite side stones
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingMethod {
    #[default]
    WaxSet,
    HandSet,
}

impl SettingMethod {
    pub fn label(&self) -> &'static str {
        match self {
            SettingMethod::WaxSet => "Wax Set",
            SettingMethod::HandSet => "Hand Set",
        }
    }
}

// ============================================================================
// Metals and labor
// ============================================================================

/// Base metal for spot pricing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetalFamily {
    Gold,
    Silver,
    Platinum,
}

/// Purity / alloy selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetalPurity {
    #[default]
    #[serde(rename = "18k_yellow")]
    Gold18kYellow,
    #[serde(rename = "18k_white")]
    Gold18kWhite,
    #[serde(rename = "18k_rose")]
    Gold18kRose,
    #[serde(rename = "14k")]
    Gold14k,
    #[serde(rename = "9k")]
    Gold9k,
    #[serde(rename = "24k")]
    Gold24k,
    #[serde(rename = "pt950")]
    Pt950,
    #[serde(rename = "pt900")]
    Pt900,
    #[serde(rename = "s925")]
    S925,
}

impl MetalPurity {
    pub fn family(&self) -> MetalFamily {
        match self {
            MetalPurity::Pt950 | MetalPurity::Pt900 => MetalFamily::Platinum,
            MetalPurity::S925 => MetalFamily::Silver,
            _ => MetalFamily::Gold,
        }
    }
}

/// Special colored-gold finish, charged as a flat surcharge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpecialColor {
    Green,
    Blue,
    Purple,
    Black,
}

/// Manufacturing complexity, increasing cost
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LaborTier {
    #[default]
    Simple,
    Middle,
    Complicated,
    SuperComplicated,
}

impl LaborTier {
    pub fn label(&self) -> &'static str {
        match self {
            LaborTier::Simple => "Simple",
            LaborTier::Middle => "Middle",
            LaborTier::Complicated => "Complicated",
            LaborTier::SuperComplicated => "Super Complicated",
        }
    }
}
