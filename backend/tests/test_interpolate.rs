//! Melee diameter → carat interpolation tests
//!
//! Exercises the piecewise-linear lookup both directly and through the
//! diameter weight mode of a stone line.

use jewelry_quote_core_rs::catalog::PricingCatalog;
use jewelry_quote_core_rs::models::WeightSpec;
use jewelry_quote_core_rs::pricing::{interpolate, resolve_weight, Breakpoint};

// ============================================================================
// Test Helpers
// ============================================================================

fn melee_table() -> Vec<Breakpoint> {
    PricingCatalog::builtin().tables().melee_mm_to_ct.clone()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

// ============================================================================
// Direct Lookup
// ============================================================================

#[test]
fn test_exact_breakpoints_return_table_values() {
    let table = melee_table();
    assert_eq!(interpolate(&table, 1.3), 0.010);
    assert_eq!(interpolate(&table, 2.0), 0.035);
    assert_eq!(interpolate(&table, 3.0), 0.120);
}

#[test]
fn test_midpoint_is_linear() {
    let table = melee_table();
    assert_close(interpolate(&table, 2.05), 0.0375);
    assert_close(interpolate(&table, 3.1), 0.130);
}

#[test]
fn test_clamps_at_table_ends() {
    let table = melee_table();
    assert_eq!(interpolate(&table, 0.5), 0.003);
    assert_eq!(interpolate(&table, 0.8), 0.003);
    assert_eq!(interpolate(&table, 5.0), 0.500);
    assert_eq!(interpolate(&table, 12.0), 0.500);
}

#[test]
fn test_no_size_means_zero() {
    let table = melee_table();
    assert_eq!(interpolate(&table, 0.0), 0.0);
    assert_eq!(interpolate(&table, -1.0), 0.0);
    assert_eq!(interpolate(&table, f64::NAN), 0.0);
}

#[test]
fn test_empty_table_is_zero() {
    assert_eq!(interpolate(&[], 2.0), 0.0);
}

#[test]
fn test_single_row_table() {
    let table = [Breakpoint::new(2.0, 0.035)];
    assert_eq!(interpolate(&table, 1.0), 0.035);
    assert_eq!(interpolate(&table, 3.0), 0.035);
}

// ============================================================================
// Through the Weight Spec
// ============================================================================

#[test]
fn test_diameter_mode_multiplies_by_count() {
    let table = melee_table();
    let weight = resolve_weight(
        &WeightSpec::Diameter {
            mm: "2.0".into(),
            count: "10".into(),
        },
        &table,
    );
    assert_close(weight.per_stone_carats, 0.035);
    assert_close(weight.total_carats, 0.35);
    assert_eq!(weight.count, 10.0);
}

#[test]
fn test_diameter_mode_with_unparseable_size() {
    let table = melee_table();
    let weight = resolve_weight(
        &WeightSpec::Diameter {
            mm: "abc".into(),
            count: "10".into(),
        },
        &table,
    );
    assert_eq!(weight.total_carats, 0.0);
}

#[test]
fn test_diameter_mode_reads_numeric_prefix() {
    let table = melee_table();
    let weight = resolve_weight(
        &WeightSpec::Diameter {
            mm: "1.3mm".into(),
            count: "2pcs".into(),
        },
        &table,
    );
    assert_close(weight.total_carats, 0.020);
}
