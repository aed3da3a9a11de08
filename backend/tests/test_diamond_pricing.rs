//! Diamond pricing tests
//!
//! Verifies the four-axis lookup (carat bracket × color × clarity, scaled by
//! cut and fluorescence), bracket boundaries, and fail-soft fallbacks.

use jewelry_quote_core_rs::catalog::keys::{CutGrade, DiamondClarity, DiamondColor, Fluorescence, StoneRole};
use jewelry_quote_core_rs::catalog::{BracketFallback, PricingCatalog, PricingConfig, PricingTables};
use jewelry_quote_core_rs::engine::QuoteEngine;
use jewelry_quote_core_rs::models::{DiamondQuality, EventLog, QuoteState, StoneKind, StoneLine, WeightSpec};
use jewelry_quote_core_rs::pricing::diamond::diamond_price_per_carat;

// ============================================================================
// Test Helpers
// ============================================================================

fn price(carats: f64, quality: DiamondQuality) -> (f64, EventLog) {
    let tables = PricingTables::default();
    let mut events = EventLog::new();
    let price = diamond_price_per_carat(&tables.diamond, carats, &quality, 0, &mut events);
    (price, events)
}

fn quality(color: DiamondColor, clarity: DiamondClarity, cut: CutGrade, fluorescence: Fluorescence) -> DiamondQuality {
    DiamondQuality {
        color,
        clarity,
        cut,
        fluorescence,
    }
}

fn single_diamond_quote(carats: &str, quality: DiamondQuality) -> QuoteState {
    let mut state = QuoteState::new("Q20260101-000000");
    state.stones = vec![StoneLine::new(StoneRole::Main, StoneKind::Diamond(quality)).with_weight(
        WeightSpec::Total {
            carats: carats.into(),
            count: "1".into(),
        },
    )];
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
// Lookup
// ============================================================================

#[test]
fn test_one_carat_gh_vs_excellent() {
    let (price, events) = price(1.0, DiamondQuality::default());
    assert_close(price, 6480.0);
    assert!(events.is_empty());
}

#[test]
fn test_strong_fluorescence_discount() {
    let q = quality(DiamondColor::GToH, DiamondClarity::Vs, CutGrade::Excellent, Fluorescence::Strong);
    let (price, _) = price(1.0, q);
    assert_close(price, 5961.60);
}

#[test]
fn test_cut_and_color_axes() {
    let q = quality(DiamondColor::DToF, DiamondClarity::IfVvs, CutGrade::Fair, Fluorescence::Faint);
    let (p, _) = price(2.5, q);
    // 15000 × 0.92 × 0.99
    assert_close(p, 13662.0);

    let q = quality(DiamondColor::KToM, DiamondClarity::I, CutGrade::Good, Fluorescence::None);
    let (price, _) = price(0.4, q);
    assert_close(price, 600.0);
}

#[test]
fn test_bracket_max_is_inclusive() {
    let q = quality(DiamondColor::GToH, DiamondClarity::Vs, CutGrade::Good, Fluorescence::None);
    // 0.49 belongs to 0.30-0.49, 0.50 to 0.50-0.69
    assert_close(price(0.49, q).0, 2100.0);
    assert_close(price(0.50, q).0, 3200.0);
    assert_close(price(1.49, q).0, 6000.0);
    assert_close(price(2.0, q).0, 10500.0);
}

#[test]
fn test_zero_or_negative_weight_is_free() {
    let (zero, events) = price(0.0, DiamondQuality::default());
    assert_eq!(zero, 0.0);
    assert!(events.is_empty());

    let (negative, _) = price(-1.0, DiamondQuality::default());
    assert_eq!(negative, 0.0);
}

// ============================================================================
// Fallbacks
// ============================================================================

#[test]
fn test_out_of_range_uses_first_bracket() {
    let q = quality(DiamondColor::GToH, DiamondClarity::Vs, CutGrade::Good, Fluorescence::None);

    let (below, events) = price(0.10, q);
    assert_close(below, 2100.0);
    assert_eq!(events.events_of_type("CaratBracketFallback").len(), 1);

    // Gap between 0.49 and 0.50
    let (gap, events) = price(0.495, q);
    assert_close(gap, 2100.0);
    assert_eq!(events.len(), 1);
}

#[test]
fn test_zero_fallback_policy() {
    let mut diamond = PricingTables::default().diamond;
    diamond.fallback = BracketFallback::Zero;
    let mut events = EventLog::new();

    let price = diamond_price_per_carat(&diamond, 0.1, &DiamondQuality::default(), 3, &mut events);
    assert_eq!(price, 0.0);

    let logged = events.events_for_line(3);
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].event_type(), "CaratBracketFallback");
}

#[test]
fn test_missing_multiplier_defaults_to_one() {
    let mut diamond = PricingTables::default().diamond;
    diamond.cuts.clear();
    let mut events = EventLog::new();

    let price = diamond_price_per_carat(&diamond, 1.0, &DiamondQuality::default(), 0, &mut events);
    assert_close(price, 6000.0);
    assert_eq!(events.events_of_type("MultiplierDefaulted").len(), 1);
}

#[test]
fn test_missing_base_cell_is_zero() {
    let mut diamond = PricingTables::default().diamond;
    if let Some(by_color) = diamond.base.get_mut("1.00-1.49") {
        by_color.remove(&DiamondColor::GToH);
    }
    let mut events = EventLog::new();

    let price = diamond_price_per_carat(&diamond, 1.2, &DiamondQuality::default(), 0, &mut events);
    assert_eq!(price, 0.0);
    assert_eq!(events.events_of_type("DiamondPriceMissing").len(), 1);
}

// ============================================================================
// Through the Engine
// ============================================================================

#[test]
fn test_line_subtotal_uses_total_weight() {
    let engine = QuoteEngine::default();
    let state = single_diamond_quote("1.0", DiamondQuality::default());
    let breakdown = engine.quote(&state);

    assert_close(breakdown.lines[0].unit_price, 6480.0);
    assert_eq!(breakdown.totals.stones_total, "6480.00");
}

#[test]
fn test_bracket_follows_line_total_not_per_stone() {
    let engine = QuoteEngine::default();
    let mut state = single_diamond_quote("1.0", DiamondQuality::default());
    // Four stones of 0.25 ct each: the 1.00-1.49 bracket still applies
    state.stones[0].weight = WeightSpec::PerUnit {
        carats_each: "0.25".into(),
        count: "4".into(),
    };
    let breakdown = engine.quote(&state);
    assert_close(breakdown.lines[0].unit_price, 6480.0);
}

#[test]
fn test_repricing_is_deterministic() {
    let engine = QuoteEngine::default();
    let q = quality(DiamondColor::IToJ, DiamondClarity::Si, CutGrade::VeryGood, Fluorescence::Medium);
    let state = single_diamond_quote("1.73", q);

    let first = engine.quote(&state);
    for _ in 0..5 {
        assert_eq!(engine.quote(&state), first);
    }
}

#[test]
fn test_diamond_table_override() {
    let mut diamond = PricingTables::default().diamond;
    diamond.cuts = vec![];
    diamond.fluorescence = vec![];
    let engine = QuoteEngine::new(PricingCatalog::builtin()).with_config(PricingConfig::default().with_diamond(diamond));

    let state = single_diamond_quote("1.0", DiamondQuality::default());
    let breakdown = engine.quote(&state);
    assert_eq!(breakdown.totals.stones_total, "6000.00");
    assert_eq!(breakdown.events.events_of_type("MultiplierDefaulted").len(), 2);
}
