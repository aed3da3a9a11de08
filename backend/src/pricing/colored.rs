//! Colored gem per-carat pricing
//!
//! Two paths:
//!
//! - **Specific color** (e.g. Royal Blue sapphire): color × 3-tier grade ×
//!   per-stone weight bracket. Table values are anchor prices for one
//!   treatment; `TreatmentPolicy` rebases them for the line's treatment.
//! - **Generic**: 4-tier grade base price × the treatment multiplier.
//!
//! A color that does not describe the gem species is ignored and the
//! generic path is used.

use crate::catalog::keys::{AdvancedGrade, GemColor, Treatment};
use crate::catalog::tables::{find_multiplier, BracketPrice, Multiplier};
use crate::catalog::PricingView;
use crate::models::event::{EventLog, PricingEvent};
use crate::models::stone::ColoredGemQuality;
use crate::pricing::bracket::{first_match, Bracket};
use serde::{Deserialize, Serialize};

/// How specific-color anchor prices are rebased across treatments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum TreatmentPolicy {
    /// Table values are prices for `anchor`. The anchor and undisclosed
    /// treatments use them unchanged, `premium_treatment` is multiplied by
    /// `premium_factor`, and any other treatment is scaled by
    /// `mult(treatment) / mult(anchor)` from the generic multiplier list.
    AnchorRelative {
        anchor: Treatment,
        premium_treatment: Treatment,
        premium_factor: f64,
    },

    /// Table values are untreated prices; apply the generic multiplier.
    GenericMultiplier,
}

impl Default for TreatmentPolicy {
    fn default() -> Self {
        TreatmentPolicy::AnchorRelative {
            anchor: Treatment::Heated,
            premium_treatment: Treatment::Unheated,
            premium_factor: 1.4,
        }
    }
}

impl TreatmentPolicy {
    /// Rebase `anchor_price` for `treatment`.
    pub fn adjust(
        &self,
        anchor_price: f64,
        treatment: Treatment,
        treatments: &[Multiplier<Treatment>],
        line: usize,
        events: &mut EventLog,
    ) -> f64 {
        match *self {
            TreatmentPolicy::AnchorRelative {
                anchor,
                premium_treatment,
                premium_factor,
            } => {
                if treatment == anchor || treatment == Treatment::NaturalUnknown {
                    return anchor_price;
                }
                if treatment == premium_treatment {
                    return anchor_price * premium_factor;
                }
                match (
                    find_multiplier(treatments, &treatment),
                    find_multiplier(treatments, &anchor),
                ) {
                    (Some(mult), Some(anchor_mult)) if anchor_mult > 0.0 => {
                        anchor_price * mult / anchor_mult
                    }
                    _ => {
                        events.log(PricingEvent::MultiplierDefaulted {
                            line,
                            table: "treatment".to_string(),
                            key: treatment.label().to_string(),
                        });
                        anchor_price
                    }
                }
            }
            TreatmentPolicy::GenericMultiplier => {
                anchor_price * treatment_multiplier(treatments, treatment, line, events)
            }
        }
    }
}

impl Bracket for BracketPrice {
    fn contains(&self, size: f64) -> bool {
        self.bracket.contains(size)
    }

    fn label(&self) -> String {
        self.bracket.label()
    }
}

fn treatment_multiplier(
    treatments: &[Multiplier<Treatment>],
    treatment: Treatment,
    line: usize,
    events: &mut EventLog,
) -> f64 {
    find_multiplier(treatments, &treatment).unwrap_or_else(|| {
        events.log(PricingEvent::MultiplierDefaulted {
            line,
            table: "treatment".to_string(),
            key: treatment.label().to_string(),
        });
        1.0
    })
}

/// USD price per carat for a colored gem line.
///
/// `per_stone_carats` selects the weight bracket on the specific-color path.
pub fn colored_gem_price_per_carat(
    view: &PricingView<'_>,
    quality: &ColoredGemQuality,
    per_stone_carats: f64,
    line: usize,
    events: &mut EventLog,
) -> f64 {
    match quality.color {
        Some(color) if color.applies_to(quality.kind) => {
            specific_color_price(view, quality, color, per_stone_carats, line, events)
        }
        Some(color) => {
            events.log(PricingEvent::ColorMismatch {
                line,
                color,
                kind: quality.kind,
            });
            generic_price(view, quality, line, events)
        }
        None => generic_price(view, quality, line, events),
    }
}

/// Grade base price × treatment multiplier. An unknown species is priced
/// from the first entry in the list.
pub fn generic_price(
    view: &PricingView<'_>,
    quality: &ColoredGemQuality,
    line: usize,
    events: &mut EventLog,
) -> f64 {
    let entry = match view.colored_gems.iter().find(|e| e.kind == quality.kind) {
        Some(entry) => Some(entry),
        None => {
            let first = view.colored_gems.first();
            events.log(PricingEvent::GemEntryFallback {
                line,
                requested: quality.kind,
                used: first.map(|e| e.kind),
            });
            first
        }
    };
    let entry = match entry {
        Some(entry) => entry,
        None => return 0.0,
    };

    let base = match entry.price(quality.grade) {
        Some(price) => price,
        None => {
            events.log(PricingEvent::GradePriceMissing {
                line,
                kind: entry.kind,
                grade: quality.grade,
            });
            return 0.0;
        }
    };

    base * treatment_multiplier(view.treatments, quality.treatment, line, events)
}

/// Bracketed anchor price rebased for the treatment; 0 when no row or
/// bracket matches.
pub fn specific_color_price(
    view: &PricingView<'_>,
    quality: &ColoredGemQuality,
    color: GemColor,
    per_stone_carats: f64,
    line: usize,
    events: &mut EventLog,
) -> f64 {
    let grade = AdvancedGrade::from(quality.grade);
    let rows = match view.advanced_gems.get(&color).and_then(|by_grade| by_grade.get(&grade)) {
        Some(rows) => rows,
        None => {
            events.log(PricingEvent::AdvancedPriceMissing { line, color, grade });
            return 0.0;
        }
    };

    // Stable sort keeps table order for equal lower bounds
    let mut ordered: Vec<&BracketPrice> = rows.iter().collect();
    ordered.sort_by(|a, b| a.bracket.lower_bound().total_cmp(&b.bracket.lower_bound()));

    match first_match(ordered.iter().copied(), per_stone_carats) {
        Some(row) => view.treatment_policy.adjust(
            row.price,
            quality.treatment,
            view.treatments,
            line,
            events,
        ),
        None => {
            events.log(PricingEvent::NoWeightBracket {
                line,
                color,
                grade,
                per_stone_carats,
            });
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::keys::{GemGrade, GemKind};
    use crate::catalog::{PricingCatalog, PricingConfig};

    fn royal_blue(grade: GemGrade, treatment: Treatment) -> ColoredGemQuality {
        ColoredGemQuality {
            kind: GemKind::Sapphire,
            grade,
            treatment,
            color: Some(GemColor::RoyalBlue),
        }
    }

    #[test]
    fn test_generic_path() {
        let catalog = PricingCatalog::builtin();
        let view = PricingView::resolve(&catalog, None);
        let mut events = EventLog::new();
        let ruby = ColoredGemQuality {
            kind: GemKind::Ruby,
            grade: GemGrade::Aa,
            treatment: Treatment::Heated,
            color: None,
        };
        let price = colored_gem_price_per_carat(&view, &ruby, 1.0, 0, &mut events);
        assert!((price - 378.0).abs() < 1e-9);
        assert!(events.is_empty());
    }

    #[test]
    fn test_specific_color_uses_per_stone_bracket() {
        let catalog = PricingCatalog::builtin();
        let view = PricingView::resolve(&catalog, None);
        let mut events = EventLog::new();
        let q = royal_blue(GemGrade::Aaa, Treatment::Heated);

        assert_eq!(colored_gem_price_per_carat(&view, &q, 0.8, 0, &mut events), 380.0);
        assert_eq!(colored_gem_price_per_carat(&view, &q, 1.0, 0, &mut events), 500.0);
        assert_eq!(colored_gem_price_per_carat(&view, &q, 1.5, 0, &mut events), 500.0);
        assert_eq!(colored_gem_price_per_carat(&view, &q, 2.5, 0, &mut events), 1400.0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_anchor_relative_treatments() {
        let catalog = PricingCatalog::builtin();
        let view = PricingView::resolve(&catalog, None);
        let mut events = EventLog::new();

        let natural = royal_blue(GemGrade::Aaa, Treatment::NaturalUnknown);
        let unheated = royal_blue(GemGrade::Aaa, Treatment::Unheated);
        let diffusion = royal_blue(GemGrade::Aaa, Treatment::Diffusion);

        assert_eq!(colored_gem_price_per_carat(&view, &natural, 0.5, 0, &mut events), 380.0);
        assert!((colored_gem_price_per_carat(&view, &unheated, 0.5, 0, &mut events) - 532.0).abs() < 1e-9);
        // 380 × 0.60 / 0.90
        let expected = 380.0 * 0.60 / 0.90;
        assert!((colored_gem_price_per_carat(&view, &diffusion, 0.5, 0, &mut events) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_generic_multiplier_policy() {
        let catalog = PricingCatalog::builtin();
        let config = PricingConfig::default().with_treatment_policy(TreatmentPolicy::GenericMultiplier);
        let view = PricingView::resolve(&catalog, Some(&config));
        let mut events = EventLog::new();
        let q = royal_blue(GemGrade::Aaa, Treatment::Unheated);
        assert!((colored_gem_price_per_carat(&view, &q, 0.5, 0, &mut events) - 475.0).abs() < 1e-9);
    }

    #[test]
    fn test_above_all_brackets_prices_zero() {
        let catalog = PricingCatalog::builtin();
        let view = PricingView::resolve(&catalog, None);
        let mut events = EventLog::new();
        let q = royal_blue(GemGrade::Aa, Treatment::Heated);
        assert_eq!(colored_gem_price_per_carat(&view, &q, 3.5, 4, &mut events), 0.0);
        assert_eq!(events.events_of_type("NoWeightBracket").len(), 1);
    }

    #[test]
    fn test_mismatched_color_uses_generic_table() {
        let catalog = PricingCatalog::builtin();
        let view = PricingView::resolve(&catalog, None);
        let mut events = EventLog::new();
        let q = ColoredGemQuality {
            kind: GemKind::Ruby,
            grade: GemGrade::Aa,
            treatment: Treatment::NaturalUnknown,
            color: Some(GemColor::RoyalBlue),
        };
        assert_eq!(colored_gem_price_per_carat(&view, &q, 1.0, 0, &mut events), 420.0);
        assert_eq!(events.events_of_type("ColorMismatch").len(), 1);
    }

    #[test]
    fn test_missing_species_uses_first_entry() {
        let catalog = PricingCatalog::builtin();
        let entries = vec![catalog.tables().colored_gems[1].clone()];
        let config = PricingConfig::default().with_colored_gems(entries);
        let view = PricingView::resolve(&catalog, Some(&config));
        let mut events = EventLog::new();

        let q = ColoredGemQuality::default();
        assert_eq!(colored_gem_price_per_carat(&view, &q, 1.0, 0, &mut events), 420.0);
        assert_eq!(events.events_of_type("GemEntryFallback").len(), 1);
    }
}
