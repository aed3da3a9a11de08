//! Built-in sample catalog
//!
//! These are sample wholesale figures in USD. Real deployments replace them
//! through a `PricingConfig` override.

use crate::catalog::keys::{
    AdvancedGrade, CutGrade, DiamondClarity, DiamondColor, Fluorescence, GemColor, GemGrade, GemKind,
    LaborTier, MeleeQuality, MetalPurity, SettingMethod, SpecialColor, Treatment,
};
use crate::catalog::tables::{
    AdvancedGemTable, BracketFallback, BracketPrice, ColoredGemEntry, DiamondBaseTable, DiamondTable,
    GradePrice, MetalEntry, Multiplier, PricingTables, SmallStoneTable, SpecialColorTable,
};
use crate::pricing::bracket::{CaratBracket, WeightBracket};
use crate::pricing::colored::TreatmentPolicy;
use crate::pricing::interpolate::Breakpoint;
use std::collections::BTreeMap;

/// Display currencies offered to the user
pub const SUPPORTED_CURRENCIES: [&str; 5] = ["LKR", "USD", "CNY", "HKD", "EUR"];

/// Currency all catalog prices are quoted in
pub const BASE_CURRENCY: &str = "USD";

/// Melee round-brilliant diameter (mm) → carats per stone
const MELEE_MM_TO_CT: [(f64, f64); 30] = [
    (0.8, 0.003), (0.9, 0.004), (1.0, 0.005), (1.1, 0.006), (1.2, 0.008), (1.3, 0.010),
    (1.4, 0.012), (1.5, 0.015), (1.6, 0.018), (1.7, 0.022), (1.8, 0.025), (1.9, 0.030),
    (2.0, 0.035), (2.1, 0.040), (2.2, 0.045), (2.3, 0.050), (2.4, 0.060), (2.5, 0.070),
    (2.6, 0.080), (2.7, 0.090), (2.8, 0.100), (2.9, 0.110), (3.0, 0.120), (3.2, 0.140),
    (3.4, 0.160), (3.6, 0.180), (3.8, 0.200), (4.0, 0.250), (4.5, 0.350), (5.0, 0.500),
];

/// Rows per bracket: color group → [IF/VVS, VS, SI, I]
const DIAMOND_BASE: [(&str, f64, f64, [[f64; 4]; 4]); 6] = [
    ("0.30-0.49", 0.30, 0.49, [
        [3500.0, 2400.0, 1500.0, 900.0],
        [3000.0, 2100.0, 1350.0, 820.0],
        [2550.0, 1800.0, 1180.0, 720.0],
        [2000.0, 1450.0, 980.0, 600.0],
    ]),
    ("0.50-0.69", 0.50, 0.69, [
        [5200.0, 3600.0, 2200.0, 1300.0],
        [4500.0, 3200.0, 2050.0, 1200.0],
        [3900.0, 2800.0, 1900.0, 1100.0],
        [3200.0, 2350.0, 1650.0, 980.0],
    ]),
    ("0.70-0.99", 0.70, 0.99, [
        [6500.0, 4800.0, 3000.0, 1800.0],
        [5900.0, 4300.0, 2800.0, 1650.0],
        [5300.0, 3900.0, 2600.0, 1550.0],
        [4300.0, 3200.0, 2200.0, 1350.0],
    ]),
    ("1.00-1.49", 1.00, 1.49, [
        [8800.0, 6500.0, 4200.0, 2600.0],
        [8000.0, 6000.0, 3900.0, 2400.0],
        [7200.0, 5400.0, 3600.0, 2250.0],
        [5900.0, 4500.0, 3100.0, 2000.0],
    ]),
    ("1.50-1.99", 1.50, 1.99, [
        [11500.0, 8600.0, 5700.0, 3600.0],
        [10600.0, 8000.0, 5300.0, 3300.0],
        [9800.0, 7400.0, 5000.0, 3100.0],
        [8200.0, 6300.0, 4300.0, 2800.0],
    ]),
    ("2.00+", 2.00, 99.0, [
        [15000.0, 11200.0, 7600.0, 5000.0],
        [14000.0, 10500.0, 7200.0, 4700.0],
        [13000.0, 9800.0, 6800.0, 4500.0],
        [11000.0, 8500.0, 6000.0, 4100.0],
    ]),
];

const DIAMOND_COLORS: [DiamondColor; 4] = [
    DiamondColor::DToF,
    DiamondColor::GToH,
    DiamondColor::IToJ,
    DiamondColor::KToM,
];

const DIAMOND_CLARITIES: [DiamondClarity; 4] = [
    DiamondClarity::IfVvs,
    DiamondClarity::Vs,
    DiamondClarity::Si,
    DiamondClarity::I,
];

/// Per species: [Commercial, AA, AAA, Premium]
const COLORED_GEM_GRADES: [(GemKind, [f64; 4]); 5] = [
    (GemKind::Sapphire, [120.0, 260.0, 520.0, 1200.0]),
    (GemKind::Ruby, [180.0, 420.0, 900.0, 2200.0]),
    (GemKind::Emerald, [160.0, 380.0, 850.0, 2000.0]),
    (GemKind::Spinel, [90.0, 220.0, 480.0, 900.0]),
    (GemKind::Tourmaline, [60.0, 140.0, 320.0, 800.0]),
];

const ADVANCED_BRACKETS: [WeightBracket; 4] = [
    WeightBracket::Below { limit: 1.0 },
    WeightBracket::Between { min: 1.0, max: 1.5 },
    WeightBracket::Between { min: 1.5, max: 2.0 },
    WeightBracket::Between { min: 2.0, max: 3.0 },
];

/// Per color: AAA, AA, A rows over `ADVANCED_BRACKETS`
const ADVANCED_GEMS: [(GemColor, [[f64; 4]; 3]); 4] = [
    (GemColor::RoyalBlue, [
        [380.0, 500.0, 700.0, 1400.0],
        [220.0, 450.0, 500.0, 1100.0],
        [150.0, 380.0, 450.0, 900.0],
    ]),
    (GemColor::CornflowerBlue, [
        [200.0, 350.0, 500.0, 1100.0],
        [150.0, 300.0, 430.0, 900.0],
        [100.0, 200.0, 300.0, 600.0],
    ]),
    (GemColor::PigeonBlood, [
        [1500.0, 2500.0, 4000.0, 8000.0],
        [800.0, 1500.0, 2500.0, 5000.0],
        [400.0, 800.0, 1200.0, 2500.0],
    ]),
    (GemColor::VividGreen, [
        [1200.0, 2000.0, 3500.0, 6000.0],
        [700.0, 1200.0, 2000.0, 4000.0],
        [300.0, 600.0, 1000.0, 2000.0],
    ]),
];

impl Default for PricingTables {
    fn default() -> Self {
        Self {
            diamond: default_diamond_table(),
            colored_gems: default_colored_gems(),
            treatments: default_treatments(),
            advanced_gems: default_advanced_gems(),
            treatment_policy: TreatmentPolicy::default(),
            small_stones: default_small_stones(),
            metals: default_metals(),
            special_color: SpecialColorTable {
                colors: vec![SpecialColor::Green, SpecialColor::Blue, SpecialColor::Purple, SpecialColor::Black],
                extra_fee: 15.0,
            },
            labor: BTreeMap::from([
                (LaborTier::Simple, 21.0),
                (LaborTier::Middle, 33.0),
                (LaborTier::Complicated, 45.0),
                (LaborTier::SuperComplicated, 70.0),
            ]),
            melee_mm_to_ct: MELEE_MM_TO_CT.iter().map(|&pair| Breakpoint::from(pair)).collect(),
        }
    }
}

fn default_diamond_table() -> DiamondTable {
    let mut base: DiamondBaseTable = BTreeMap::new();
    let mut carat_brackets = Vec::with_capacity(DIAMOND_BASE.len());

    for (key, min, max, rows) in DIAMOND_BASE.iter() {
        carat_brackets.push(CaratBracket::new(key, *min, *max));

        let by_color = DIAMOND_COLORS
            .iter()
            .zip(rows.iter())
            .map(|(color, prices)| {
                let by_clarity = DIAMOND_CLARITIES.iter().copied().zip(prices.iter().copied()).collect();
                (*color, by_clarity)
            })
            .collect();
        base.insert(key.to_string(), by_color);
    }

    DiamondTable {
        carat_brackets,
        base,
        cuts: vec![
            Multiplier::new(CutGrade::Excellent, 1.08),
            Multiplier::new(CutGrade::VeryGood, 1.03),
            Multiplier::new(CutGrade::Good, 1.00),
            Multiplier::new(CutGrade::Fair, 0.92),
        ],
        fluorescence: vec![
            Multiplier::new(Fluorescence::None, 1.00),
            Multiplier::new(Fluorescence::Faint, 0.99),
            Multiplier::new(Fluorescence::Medium, 0.96),
            Multiplier::new(Fluorescence::Strong, 0.92),
        ],
        fallback: BracketFallback::FirstBracket,
    }
}

fn default_colored_gems() -> Vec<ColoredGemEntry> {
    COLORED_GEM_GRADES
        .iter()
        .map(|(kind, prices)| ColoredGemEntry {
            kind: *kind,
            grades: GemGrade::ALL
                .iter()
                .zip(prices.iter())
                .map(|(grade, price)| GradePrice { grade: *grade, price: *price })
                .collect(),
        })
        .collect()
}

fn default_treatments() -> Vec<Multiplier<Treatment>> {
    vec![
        Multiplier::new(Treatment::NaturalUnknown, 1.00),
        Multiplier::new(Treatment::Heated, 0.90),
        Multiplier::new(Treatment::Unheated, 1.25),
        Multiplier::new(Treatment::Oiled, 0.85),
        Multiplier::new(Treatment::Diffusion, 0.60),
        Multiplier::new(Treatment::GlassFilled, 0.45),
        Multiplier::new(Treatment::FractureFilled, 0.55),
    ]
}

fn default_advanced_gems() -> AdvancedGemTable {
    let grades = [AdvancedGrade::Aaa, AdvancedGrade::Aa, AdvancedGrade::A];

    ADVANCED_GEMS
        .iter()
        .map(|(color, rows)| {
            let by_grade = grades
                .iter()
                .zip(rows.iter())
                .map(|(grade, prices)| {
                    let row = ADVANCED_BRACKETS
                        .iter()
                        .zip(prices.iter())
                        .map(|(bracket, price)| BracketPrice { bracket: *bracket, price: *price })
                        .collect();
                    (*grade, row)
                })
                .collect();
            (*color, by_grade)
        })
        .collect()
}

fn default_small_stones() -> SmallStoneTable {
    SmallStoneTable {
        diamond_standard: BTreeMap::from([(MeleeQuality::Si, 600.0), (MeleeQuality::Vs, 800.0)]),
        diamond_single_cut: 300.0,
        zircon_per_piece: 0.035,
        moissanite: BTreeMap::from([(SettingMethod::WaxSet, 0.55), (SettingMethod::HandSet, 1.05)]),
    }
}

fn default_metals() -> BTreeMap<MetalPurity, MetalEntry> {
    let entry = |name: &str, wastage_percent: f64, price_per_gram: f64, purity_fraction: f64| MetalEntry {
        name: name.to_string(),
        wastage_percent,
        price_per_gram,
        extra_fee: 0.0,
        purity_fraction,
    };

    BTreeMap::from([
        (MetalPurity::Gold18kYellow, entry("18K Yellow Gold", 15.0, 70.0, 0.750)),
        (MetalPurity::Gold18kWhite, entry("18K White Gold", 15.0, 70.0, 0.750)),
        (MetalPurity::Gold18kRose, entry("18K Rose Gold", 15.0, 70.0, 0.750)),
        (MetalPurity::Gold14k, entry("14K Gold", 17.0, 55.0, 0.585)),
        (MetalPurity::Gold9k, entry("9K Gold", 23.0, 40.0, 0.375)),
        (MetalPurity::Gold24k, entry("24K Gold", 10.0, 90.0, 0.999)),
        (MetalPurity::Pt950, entry("PT950", 30.0, 95.0, 0.950)),
        (MetalPurity::Pt900, entry("PT900", 30.0, 90.0, 0.900)),
        (MetalPurity::S925, entry("S925 Silver", 0.0, 1.2, 0.925)),
    ])
}
