//! Side stone tests
//!
//! Melee diamonds measured by diameter, flat-rate commodity stones, and the
//! per-carat versus per-piece charging basis.

use jewelry_quote_core_rs::catalog::keys::{MeleeQuality, SettingMethod, StoneRole};
use jewelry_quote_core_rs::catalog::{PricingCatalog, PricingConfig, PricingTables};
use jewelry_quote_core_rs::engine::QuoteEngine;
use jewelry_quote_core_rs::models::{EventLog, QuoteState, SmallStone, StoneLine, WeightSpec};
use jewelry_quote_core_rs::pricing::small_stone::small_stone_price;
use jewelry_quote_core_rs::pricing::PricingBasis;
use std::collections::BTreeMap;

// ============================================================================
// Test Helpers
// ============================================================================

fn by_diameter(mm: &str, count: &str) -> WeightSpec {
    WeightSpec::Diameter {
        mm: mm.into(),
        count: count.into(),
    }
}

fn side_only(line: StoneLine) -> QuoteState {
    let mut state = QuoteState::new("Q20260101-000000");
    state.stones = vec![line];
    state
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {}, got {}",
        expected,
        actual
    );
}

// ============================================================================
// Melee Diamonds Priced from the Diamond Table
// ============================================================================

#[test]
fn test_side_diamond_by_diameter() {
    let engine = QuoteEngine::default();
    let line = StoneLine::diamond(StoneRole::Side).with_weight(by_diameter("2.0", "10"));
    let breakdown = engine.quote(&side_only(line));

    let priced = &breakdown.lines[0];
    assert_close(priced.weight.total_carats, 0.35);
    assert_close(priced.unit_price, 2268.0);
    assert_eq!(breakdown.totals.stones_total, "793.80");
}

#[test]
fn test_side_line_defaults_to_zero_count() {
    let engine = QuoteEngine::default();
    let line = StoneLine::diamond(StoneRole::Side).with_weight(by_diameter("2.0", ""));
    let breakdown = engine.quote(&side_only(line));
    assert_eq!(breakdown.totals.stones_total, "0.00");
}

// ============================================================================
// Flat-Rate Small Stones
// ============================================================================

#[test]
fn test_standard_melee_per_carat() {
    let engine = QuoteEngine::default();
    let line = StoneLine::small_stone(SmallStone::DiamondStandard {
        quality: MeleeQuality::Si,
    })
    .with_weight(by_diameter("1.3", "20"));
    let breakdown = engine.quote(&side_only(line));

    assert_eq!(breakdown.lines[0].basis, PricingBasis::PerCarat);
    // 20 × 0.010 ct × 600
    assert_eq!(breakdown.totals.stones_total, "120.00");
}

#[test]
fn test_single_cut_per_carat() {
    let engine = QuoteEngine::default();
    let line = StoneLine::small_stone(SmallStone::DiamondSingleCut).with_weight(by_diameter("1.0", "30"));
    let breakdown = engine.quote(&side_only(line));
    assert_eq!(breakdown.totals.stones_total, "45.00");
}

#[test]
fn test_zircon_per_piece_keeps_fractional_cents() {
    let engine = QuoteEngine::default();
    let line = StoneLine::small_stone(SmallStone::Zircon).with_weight(by_diameter("1.5", "40"));
    let breakdown = engine.quote(&side_only(line));

    let priced = &breakdown.lines[0];
    assert_eq!(priced.basis, PricingBasis::PerPiece);
    assert_eq!(priced.quantity, 40.0);
    assert_close(priced.unit_price, 0.035);
    assert_eq!(priced.subtotal_cents, 140);
}

#[test]
fn test_moissanite_setting_methods() {
    let engine = QuoteEngine::default();

    let hand = StoneLine::small_stone(SmallStone::Moissanite {
        setting: SettingMethod::HandSet,
    })
    .with_weight(by_diameter("2.0", "12"));
    assert_eq!(engine.totals(&side_only(hand)).stones_total, "12.60");

    let wax = StoneLine::small_stone(SmallStone::Moissanite {
        setting: SettingMethod::WaxSet,
    })
    .with_weight(by_diameter("2.0", "12"));
    assert_eq!(engine.totals(&side_only(wax)).stones_total, "6.60");
}

#[test]
fn test_per_piece_ignores_diameter() {
    let engine = QuoteEngine::default();
    let small = StoneLine::small_stone(SmallStone::Zircon).with_weight(by_diameter("1.0", "100"));
    let large = StoneLine::small_stone(SmallStone::Zircon).with_weight(by_diameter("4.0", "100"));
    assert_eq!(
        engine.totals(&side_only(small)).stones_total,
        engine.totals(&side_only(large)).stones_total
    );
}

#[test]
fn test_manual_price_keeps_per_piece_basis() {
    let engine = QuoteEngine::default();
    let line = StoneLine::small_stone(SmallStone::Zircon)
        .with_weight(by_diameter("1.5", "40"))
        .with_manual_price("0.1");
    let breakdown = engine.quote(&side_only(line));

    assert_eq!(breakdown.lines[0].basis, PricingBasis::PerPiece);
    assert_eq!(breakdown.totals.stones_total, "4.00");
}

#[test]
fn test_missing_quality_price_is_zero() {
    let mut table = PricingTables::default().small_stones;
    table.diamond_standard = BTreeMap::from([(MeleeQuality::Si, 600.0)]);
    let mut events = EventLog::new();

    let price = small_stone_price(
        &table,
        &SmallStone::DiamondStandard {
            quality: MeleeQuality::Vs,
        },
        2,
        &mut events,
    );
    assert_eq!(price.unit_price, 0.0);
    assert_eq!(events.events_for_line(2).len(), 1);
}

#[test]
fn test_small_stone_override() {
    let mut table = PricingTables::default().small_stones;
    table.zircon_per_piece = 0.05;
    let engine = QuoteEngine::new(PricingCatalog::builtin()).with_config(PricingConfig::default().with_small_stones(table));

    let line = StoneLine::small_stone(SmallStone::Zircon).with_weight(by_diameter("1.5", "40"));
    assert_eq!(engine.totals(&side_only(line)).stones_total, "2.00");
}
