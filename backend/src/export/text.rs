//! Plain-text quote summary
//!
//! The layout and field order are fixed so summaries can be compared
//! byte-for-byte between runs.

use crate::core::{cents_to_string, format_money};
use crate::engine::quote::QuoteBreakdown;
use crate::models::quote::QuoteState;
use crate::pricing::small_stone::PricingBasis;
use std::fmt;

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

/// A state paired with its breakdown, displayed as the text summary
#[derive(Debug, Clone, Copy)]
pub struct QuoteSummary<'a> {
    pub state: &'a QuoteState,
    pub breakdown: &'a QuoteBreakdown,
}

impl<'a> QuoteSummary<'a> {
    pub fn new(state: &'a QuoteState, breakdown: &'a QuoteBreakdown) -> Self {
        Self { state, breakdown }
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Jewelry Quote")?;
        writeln!(f, "Quote No: {}", self.state.quote_no)?;
        writeln!(f, "Customer: {}", or_dash(&self.state.customer_name))?;
        writeln!(f, "Product: {}", or_dash(&self.state.product_name))?;
        writeln!(f, "Currency: {}", self.breakdown.currency)?;
        writeln!(f)
    }

    fn write_stones(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ccy = &self.breakdown.currency;
        writeln!(f, "【Gem Details】")?;
        for (stone, priced) in self.state.stones.iter().zip(self.breakdown.lines.iter()) {
            let price_label = match priced.basis {
                PricingBasis::PerCarat => "Price/ct",
                PricingBasis::PerPiece => "Price/pc",
            };
            writeln!(
                f,
                "{}. {} | {} | {} | W.Mode:{} | Weight:{} | {}:{} | Sub:{} {}",
                priced.index + 1,
                stone.role.label(),
                stone.kind.type_label(),
                stone.detail(),
                stone.weight.label(),
                stone.weight.describe(),
                price_label,
                format_money(priced.unit_price),
                ccy,
                cents_to_string(priced.subtotal_cents)
            )?;
        }
        writeln!(f, "Gems Total: {} {}", ccy, self.breakdown.totals.stones_total)?;
        writeln!(f)
    }

    fn write_metal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metal = &self.breakdown.metal;
        let spec = &self.state.metal;
        writeln!(f, "【Precious Metal】")?;
        writeln!(f, "Material: {}", metal.name)?;
        writeln!(f, "Weight(g): {}", spec.weight_g.or_zero())?;
        writeln!(f, "Price/g: {} ({})", format_money(metal.price_per_gram), spec.price_mode.label())?;
        writeln!(f, "Loss Rate: {}%", metal.loss_rate_percent)?;
        writeln!(f, "Extra Fee: {}", format_money(metal.extra_fee))?;
        writeln!(f, "Metal Subtotal: {} {}", self.breakdown.currency, self.breakdown.totals.metal_sub)?;
        writeln!(f)
    }

    fn write_labor_and_packaging(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ccy = &self.breakdown.currency;
        let totals = &self.breakdown.totals;
        let labor = &self.state.labor;
        let packaging = &self.state.packaging;

        writeln!(f, "【Labor】")?;
        writeln!(f, "Complexity: {} ({})", labor.tier.label(), labor.mode.label())?;
        writeln!(f, "Labor Subtotal: {} {}", ccy, totals.labor_sub)?;
        writeln!(f)?;

        writeln!(f, "【Packaging】")?;
        writeln!(f, "Pack Fee: {}", packaging.pack_fee.or_zero())?;
        writeln!(f, "Cert/Tag: {}", packaging.cert_fee.or_zero())?;
        writeln!(f, "Pack Subtotal: {} {}", ccy, totals.pack_sub)?;
        writeln!(f)
    }
}

impl fmt::Display for QuoteSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ccy = &self.breakdown.currency;
        let totals = &self.breakdown.totals;

        self.write_header(f)?;
        self.write_stones(f)?;
        self.write_metal(f)?;
        self.write_labor_and_packaging(f)?;

        writeln!(f, "Total Cost: {} {}", ccy, totals.cost_total)?;
        writeln!(f, "Profit Rate: {}%", self.state.profit_rate.or_zero())?;
        writeln!(f, "Tax Rate: {}%", self.state.tax_rate.or_zero())?;
        writeln!(f, "Final Quote: {} {}", ccy, totals.quote_total)
    }
}

/// Render the summary for a state and its breakdown.
pub fn render_quote_text(state: &QuoteState, breakdown: &QuoteBreakdown) -> String {
    QuoteSummary::new(state, breakdown).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::QuoteEngine;
    use crate::models::WeightSpec;

    #[test]
    fn test_header_uses_dash_for_blank_names() {
        let engine = QuoteEngine::default();
        let state = QuoteState::new("Q20260101-000000");
        let text = engine.export_text(&state);
        assert!(text.starts_with("Jewelry Quote\nQuote No: Q20260101-000000\nCustomer: -\nProduct: -\nCurrency: USD\n"));
    }

    #[test]
    fn test_stone_line_format() {
        let engine = QuoteEngine::default();
        let mut state = QuoteState::new("Q1");
        state.stones[0].weight = WeightSpec::Total {
            carats: "1.5".into(),
            count: "1".into(),
        };
        let text = engine.export_text(&state);
        assert!(text.contains(
            "1. Main Stone | Sapphire | Grade:AA | Treat:Natural (Default) | W.Mode:Total Weight (ct) | Weight:1.5ct | Price/ct:260.00 | Sub:USD 390.00\n"
        ));
        assert!(text.contains("Gems Total: USD 390.00\n"));
        assert!(text.ends_with("Final Quote: USD 411.00\n"));
    }

    #[test]
    fn test_summary_display_matches_render() {
        let engine = QuoteEngine::default();
        let state = QuoteState::new("Q1");
        let breakdown = engine.quote(&state);
        let summary = format!("{}", QuoteSummary::new(&state, &breakdown));
        assert_eq!(summary, render_quote_text(&state, &breakdown));
    }
}
