//! Property-based tests for the pricing engine.
//!
//! These tests use proptest to generate random inputs and verify that
//! pricing keeps its invariants for any entered values.
//!
//! # Properties
//!
//! 1. **Never panics**: any text in any numeric field prices to a result,
//!    huge and exponent inputs included
//! 2. **Determinism**: the same state always prices identically
//! 3. **Bounds**: interpolation stays inside the table's value range
//! 4. **Compounding**: quote = cost × (1 + profit) × (1 + tax)
//!
//! # Running Property Tests
//!
//! ```bash
//! PROPTEST_CASES=10000 cargo test -p jewelry-quote-core-rs --test test_properties
//! ```

use proptest::prelude::*;

use jewelry_quote_core_rs::catalog::keys::{
    CutGrade, DiamondClarity, DiamondColor, Fluorescence, LaborTier, MetalPurity, PriceMode, StoneRole,
};
use jewelry_quote_core_rs::catalog::PricingCatalog;
use jewelry_quote_core_rs::core::{in_money_range, parse_lenient, to_cents};
use jewelry_quote_core_rs::engine::QuoteEngine;
use jewelry_quote_core_rs::models::{
    DiamondQuality, EventLog, LaborSpec, MetalSpec, QuoteState, StoneKind, StoneLine, WeightSpec,
};
use jewelry_quote_core_rs::pricing::diamond::diamond_price_per_carat;
use jewelry_quote_core_rs::pricing::interpolate;

// =============================================================================
// Test Strategies
// =============================================================================

/// Text a user might leave in a numeric field
fn numeric_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,4}(\\.[0-9]{1,3})?",
        "-?[0-9]{1,3}\\.[0-9]{1,2}[a-z]{0,3}",
        "[a-zA-Z \\.\\-]{0,8}",
        "-?[1-9](\\.[0-9])?e[0-9]{1,3}",
        Just("9e15".to_string()),
        Just("1e200".to_string()),
        Just(String::new()),
    ]
}

fn diamond_quality() -> impl Strategy<Value = DiamondQuality> {
    (0usize..4, 0usize..4, 0usize..4, 0usize..4).prop_map(|(color, clarity, cut, fluor)| DiamondQuality {
        color: [DiamondColor::DToF, DiamondColor::GToH, DiamondColor::IToJ, DiamondColor::KToM][color],
        clarity: [DiamondClarity::IfVvs, DiamondClarity::Vs, DiamondClarity::Si, DiamondClarity::I][clarity],
        cut: CutGrade::from_index(cut).unwrap_or_default(),
        fluorescence: Fluorescence::from_index(fluor).unwrap_or_default(),
    })
}

fn metal_purity() -> impl Strategy<Value = MetalPurity> {
    prop_oneof![
        Just(MetalPurity::Gold18kYellow),
        Just(MetalPurity::Gold14k),
        Just(MetalPurity::Gold9k),
        Just(MetalPurity::Gold24k),
        Just(MetalPurity::Pt950),
        Just(MetalPurity::S925),
    ]
}

/// Quote with one diamond line and free-form metal, labor and rate fields
fn arbitrary_quote() -> impl Strategy<Value = QuoteState> {
    (
        diamond_quality(),
        numeric_text(),
        numeric_text(),
        metal_purity(),
        numeric_text(),
        numeric_text(),
        numeric_text(),
        numeric_text(),
    )
        .prop_map(|(quality, carats, count, purity, weight, extra, profit, tax)| {
            let mut state = QuoteState::new("Q20260101-000000").with_rates(profit, tax);
            state.stones = vec![StoneLine::new(StoneRole::Main, StoneKind::Diamond(quality)).with_weight(
                WeightSpec::Total {
                    carats: carats.into(),
                    count: count.into(),
                },
            )];
            state.metal = MetalSpec::new(purity, weight);
            state.metal.extra_fee = extra.into();
            state.labor = LaborSpec::tier(LaborTier::Middle);
            state
        })
}

// =============================================================================
// Lenient Parsing
// =============================================================================

proptest! {
    /// Parsing never panics and never yields a non-finite value
    #[test]
    fn prop_parse_is_total(raw in ".{0,40}") {
        prop_assert!(parse_lenient(&raw).is_finite());
    }

    /// Plain decimals parse to themselves
    #[test]
    fn prop_plain_decimal_parses(value in 0.0f64..1.0e6) {
        let text = format!("{}", value);
        prop_assert_eq!(parse_lenient(&text), value);
    }
}

// =============================================================================
// Interpolation
// =============================================================================

proptest! {
    /// Melee carats never decrease as the diameter grows
    #[test]
    fn prop_interpolation_monotonic(a in 0.01f64..8.0, b in 0.01f64..8.0) {
        let catalog = PricingCatalog::builtin();
        let table = &catalog.tables().melee_mm_to_ct;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(interpolate(table, lo) <= interpolate(table, hi) + 1e-12);
    }

    /// Positive sizes stay inside the table's value range
    #[test]
    fn prop_interpolation_bounded(mm in 0.001f64..20.0) {
        let catalog = PricingCatalog::builtin();
        let table = &catalog.tables().melee_mm_to_ct;
        let value = interpolate(table, mm);
        prop_assert!(value >= 0.003 - 1e-12);
        prop_assert!(value <= 0.500 + 1e-12);
    }

    /// Zero and negative sizes mean "not entered"
    #[test]
    fn prop_interpolation_zero_sentinel(mm in -100.0f64..=0.0) {
        let catalog = PricingCatalog::builtin();
        prop_assert_eq!(interpolate(&catalog.tables().melee_mm_to_ct, mm), 0.0);
    }
}

// =============================================================================
// Component Pricing
// =============================================================================

proptest! {
    /// Diamond price per carat is deterministic and non-negative
    #[test]
    fn prop_diamond_price_deterministic(carats in -1.0f64..120.0, quality in diamond_quality()) {
        let catalog = PricingCatalog::builtin();
        let table = &catalog.tables().diamond;

        let first = diamond_price_per_carat(table, carats, &quality, 0, &mut EventLog::new());
        let second = diamond_price_per_carat(table, carats, &quality, 0, &mut EventLog::new());

        prop_assert_eq!(first, second);
        prop_assert!(first >= 0.0);
        if carats <= 0.0 {
            prop_assert_eq!(first, 0.0);
        }
    }

    /// Metal subtotal is never negative, whatever is typed
    #[test]
    fn prop_metal_cost_non_negative(
        purity in metal_purity(),
        weight in numeric_text(),
        price in numeric_text(),
        loss in numeric_text(),
        extra in numeric_text(),
        manual in any::<bool>(),
    ) {
        let mut state = QuoteState::new("Q1");
        state.stones.clear();
        state.metal = MetalSpec::new(purity, weight);
        state.metal.price_per_gram = price.into();
        state.metal.loss_rate = loss.into();
        state.metal.extra_fee = extra.into();
        if manual {
            state.metal.price_mode = PriceMode::Manual;
        }

        let breakdown = QuoteEngine::default().quote(&state);
        prop_assert!(breakdown.metal.subtotal >= 0.0);
        prop_assert!(breakdown.metal.subtotal_cents >= 0);
    }
}

// =============================================================================
// Whole Quote
// =============================================================================

proptest! {
    /// Repricing the same state yields the same breakdown
    #[test]
    fn prop_quote_deterministic(state in arbitrary_quote()) {
        let engine = QuoteEngine::default();
        prop_assert_eq!(engine.quote(&state), engine.quote(&state));
    }

    /// Quote compounds profit then tax over the cost
    #[test]
    fn prop_compounding_identity(state in arbitrary_quote()) {
        let breakdown = QuoteEngine::default().quote(&state);
        let profit = state.profit_rate.value() / 100.0;
        let tax = state.tax_rate.value() / 100.0;
        let expected = breakdown.cost_total * (1.0 + profit) * (1.0 + tax);

        if breakdown.events.events_of_type("AmountOutOfRange").is_empty() {
            prop_assert_eq!(to_cents(breakdown.quote_total), to_cents(expected));
        }
    }

    /// Cost is the sum of its parts, to the cent
    #[test]
    fn prop_cost_is_sum_of_components(state in arbitrary_quote()) {
        let breakdown = QuoteEngine::default().quote(&state);
        let sum = breakdown.stones_total + breakdown.metal.subtotal + breakdown.labor + breakdown.packaging;
        if breakdown.events.events_of_type("AmountOutOfRange").is_empty() {
            prop_assert_eq!(to_cents(breakdown.cost_total), to_cents(sum));
        }
    }

    /// Totals are always well-formed 2-decimal strings
    #[test]
    fn prop_totals_are_two_decimal(state in arbitrary_quote()) {
        let totals = QuoteEngine::default().totals(&state);
        for value in [
            &totals.stones_total,
            &totals.metal_sub,
            &totals.labor_sub,
            &totals.pack_sub,
            &totals.cost_total,
            &totals.quote_total,
        ] {
            let (_, cents) = value.rsplit_once('.').unwrap_or(("", ""));
            prop_assert_eq!(cents.len(), 2, "bad money string {}", value);
        }
    }

    /// Every total stays inside the money range
    #[test]
    fn prop_totals_bounded(state in arbitrary_quote()) {
        let breakdown = QuoteEngine::default().quote(&state);
        for value in [breakdown.stones_total, breakdown.metal.subtotal, breakdown.cost_total, breakdown.quote_total] {
            prop_assert!(in_money_range(value));
        }
    }
}
