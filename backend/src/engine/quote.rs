//! Quote Engine - full pricing pipeline
//!
//! Every edit reprices the whole quote:
//!
//! ```text
//! 1. Resolve effective tables (catalog + overrides)
//! 2. Fix the display-currency rate
//! 3. Price each stone line (rounded subtotal per line)
//! 4. Price metal, labor, packaging
//! 5. cost  = Σ lines + metal + labor + packaging
//! 6. quote = cost × (1 + profit) × (1 + tax)
//! ```
//!
//! # Critical Invariants
//!
//! - **Pure**: inputs are borrowed immutably, output is freshly allocated
//! - **Total**: never fails; fallbacks are reported in `QuoteBreakdown::events`
//! - **Bounded**: every amount beyond `MAX_MONEY` prices at 0 and is logged
//! - **Round-then-sum**: by default line subtotals are rounded to cents
//!   before they are summed
//!
//! # Example
//!
//! ```rust
//! use jewelry_quote_core_rs::engine::QuoteEngine;
//! use jewelry_quote_core_rs::models::{QuoteState, WeightSpec};
//!
//! let engine = QuoteEngine::default();
//! let mut state = QuoteState::new("Q20260101-120000");
//! state.stones[0].weight = WeightSpec::Total { carats: "1".into(), count: "1".into() };
//!
//! let totals = engine.totals(&state);
//! assert_eq!(totals.stones_total, "260.00");
//! assert_eq!(totals.labor_sub, "21.00");
//! ```

use crate::catalog::{PricingCatalog, PricingConfig, PricingTables, PricingView};
use crate::core::to_cents;
use crate::engine::checkpoint::{compute_tables_hash, QuoteSnapshot, SnapshotError};
use crate::export::text::render_quote_text;
use crate::models::event::EventLog;
use crate::models::quote::QuoteState;
use crate::models::totals::ComputedTotals;
use crate::pricing::currency::{CurrencyAdjuster, CurrencyRateTable};
use crate::pricing::labor::labor_cost;
use crate::pricing::line_item::{price_line, LinePricing};
use crate::pricing::metal::{metal_cost, MetalCost, MetalSpotRates};
use serde::{Deserialize, Serialize};

// ============================================================================
// Options
// ============================================================================

/// How stone line subtotals enter the stones total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationMode {
    /// Round each line to cents, then sum
    #[default]
    RoundLinesFirst,
    /// Sum unrounded line values
    FullPrecision,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    #[serde(default)]
    pub aggregation: AggregationMode,
}

// ============================================================================
// Pipeline
// ============================================================================

/// Everything one pricing run reads
#[derive(Debug, Clone, Copy)]
pub struct QuoteInputs<'a> {
    pub state: &'a QuoteState,
    pub catalog: &'a PricingCatalog,
    pub config: Option<&'a PricingConfig>,
    pub rates: Option<&'a CurrencyRateTable>,
    pub spot: Option<&'a MetalSpotRates>,
    pub options: EngineOptions,
}

impl<'a> QuoteInputs<'a> {
    /// Inputs with built-in defaults for everything but the state and catalog
    pub fn new(state: &'a QuoteState, catalog: &'a PricingCatalog) -> Self {
        Self {
            state,
            catalog,
            config: None,
            rates: None,
            spot: None,
            options: EngineOptions::default(),
        }
    }
}

/// Full result of a pricing run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    pub currency: String,

    /// Rate applied to auto prices
    pub currency_rate: f64,

    pub lines: Vec<LinePricing>,
    pub metal: MetalCost,
    pub labor: f64,
    pub packaging: f64,

    pub stones_total: f64,
    pub cost_total: f64,
    pub quote_total: f64,

    pub totals: ComputedTotals,
    pub events: EventLog,
}

/// Price a quote.
pub fn price_quote(inputs: &QuoteInputs<'_>) -> QuoteBreakdown {
    let state = inputs.state;
    let view = PricingView::resolve(inputs.catalog, inputs.config);
    let mut events = EventLog::new();

    let fx = CurrencyAdjuster::resolve(inputs.rates, &state.currency, &mut events);

    let lines: Vec<LinePricing> = state
        .stones
        .iter()
        .enumerate()
        .map(|(index, line)| price_line(&view, line, index, &fx, &mut events))
        .collect();

    let stones_total = match inputs.options.aggregation {
        AggregationMode::RoundLinesFirst => {
            let cents = lines.iter().fold(0i64, |acc, l| acc.saturating_add(l.subtotal_cents));
            cents as f64 / 100.0
        }
        AggregationMode::FullPrecision => lines.iter().map(|l| l.subtotal).sum(),
    };
    let stones_total = events.bound_amount(stones_total, "stones", None);

    let metal = metal_cost(&view, &state.metal, &fx, inputs.spot, &mut events);
    let labor = labor_cost(&view, &state.labor, &fx, &mut events);
    let labor = events.bound_amount(labor, "labor", None);
    let packaging = events.bound_amount(state.packaging.subtotal(), "packaging", None);

    let cost_total = events.bound_amount(stones_total + metal.subtotal + labor + packaging, "cost", None);
    let profit = state.profit_rate.value() / 100.0;
    let tax = state.tax_rate.value() / 100.0;
    let quote_total = events.bound_amount(cost_total * (1.0 + profit) * (1.0 + tax), "quote", None);

    let totals = ComputedTotals::from_cents(
        to_cents(stones_total),
        to_cents(metal.subtotal),
        to_cents(labor),
        to_cents(packaging),
        to_cents(cost_total),
        to_cents(quote_total),
    );

    tracing::debug!(
        quote_no = %state.quote_no,
        currency = %state.currency,
        lines = lines.len(),
        fallbacks = events.len(),
        quote_total = %totals.quote_total,
        "priced quote"
    );

    QuoteBreakdown {
        currency: state.currency.clone(),
        currency_rate: fx.rate(),
        lines,
        metal,
        labor,
        packaging,
        stones_total,
        cost_total,
        quote_total,
        totals,
        events,
    }
}

/// Totals only
pub fn compute_totals(
    state: &QuoteState,
    catalog: &PricingCatalog,
    config: Option<&PricingConfig>,
    rates: Option<&CurrencyRateTable>,
    spot: Option<&MetalSpotRates>,
) -> ComputedTotals {
    let inputs = QuoteInputs {
        state,
        catalog,
        config,
        rates,
        spot,
        options: EngineOptions::default(),
    };
    price_quote(&inputs).totals
}

// ============================================================================
// Owning holder
// ============================================================================

/// Catalog, overrides, rates and options held together for a host
#[derive(Debug, Clone, Default)]
pub struct QuoteEngine {
    catalog: PricingCatalog,
    config: Option<PricingConfig>,
    rates: Option<CurrencyRateTable>,
    spot: Option<MetalSpotRates>,
    options: EngineOptions,
}

impl QuoteEngine {
    pub fn new(catalog: PricingCatalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn with_config(mut self, config: PricingConfig) -> Self {
        self.set_config(Some(config));
        self
    }

    pub fn with_rates(mut self, rates: CurrencyRateTable) -> Self {
        self.rates = Some(rates);
        self
    }

    pub fn with_spot(mut self, spot: MetalSpotRates) -> Self {
        self.spot = Some(spot);
        self
    }

    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the overrides; an empty override is stored as none
    pub fn set_config(&mut self, config: Option<PricingConfig>) {
        self.config = config.filter(|c| !c.is_empty());
    }

    pub fn set_rates(&mut self, rates: Option<CurrencyRateTable>) {
        self.rates = rates;
    }

    pub fn set_spot(&mut self, spot: Option<MetalSpotRates>) {
        self.spot = spot;
    }

    pub fn set_options(&mut self, options: EngineOptions) {
        self.options = options;
    }

    pub fn catalog(&self) -> &PricingCatalog {
        &self.catalog
    }

    pub fn config(&self) -> Option<&PricingConfig> {
        self.config.as_ref()
    }

    pub fn rates(&self) -> Option<&CurrencyRateTable> {
        self.rates.as_ref()
    }

    pub fn spot(&self) -> Option<&MetalSpotRates> {
        self.spot.as_ref()
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    pub fn view(&self) -> PricingView<'_> {
        PricingView::resolve(&self.catalog, self.config.as_ref())
    }

    /// Owned copy of the effective tables
    pub fn effective_tables(&self) -> PricingTables {
        self.view().to_tables()
    }

    fn inputs<'a>(&'a self, state: &'a QuoteState) -> QuoteInputs<'a> {
        QuoteInputs {
            state,
            catalog: &self.catalog,
            config: self.config.as_ref(),
            rates: self.rates.as_ref(),
            spot: self.spot.as_ref(),
            options: self.options,
        }
    }

    pub fn quote(&self, state: &QuoteState) -> QuoteBreakdown {
        price_quote(&self.inputs(state))
    }

    pub fn totals(&self, state: &QuoteState) -> ComputedTotals {
        self.quote(state).totals
    }

    /// Plain-text summary of the priced quote
    pub fn export_text(&self, state: &QuoteState) -> String {
        let breakdown = self.quote(state);
        render_quote_text(state, &breakdown)
    }

    pub fn tables_hash(&self) -> Result<String, SnapshotError> {
        compute_tables_hash(&self.effective_tables())
    }

    /// Capture `state` bound to the current effective tables
    pub fn snapshot(&self, state: &QuoteState) -> Result<QuoteSnapshot, SnapshotError> {
        QuoteSnapshot::capture(state, &self.effective_tables())
    }

    /// Restore a snapshot taken against the same effective tables
    pub fn restore(&self, json: &str) -> Result<QuoteState, SnapshotError> {
        let snapshot = QuoteSnapshot::from_json(json)?;
        snapshot.restore(&self.effective_tables())
    }
}
