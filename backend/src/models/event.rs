//! Pricing events for auditing fail-soft lookups.
//!
//! The pricing path never errors. Whenever it substitutes a default for a
//! missing table entry (a 0 price, a 1.0 multiplier, the first bracket) it
//! records a `PricingEvent`, so a misconfigured catalog is observable from
//! the breakdown without failing the quote.
//!
//! # Example
//!
//! ```rust
//! use jewelry_quote_core_rs::models::{EventLog, PricingEvent};
//!
//! let mut log = EventLog::new();
//! log.log(PricingEvent::CurrencyRateDefaulted {
//!     currency: "XYZ".to_string(),
//! });
//!
//! assert_eq!(log.len(), 1);
//! assert_eq!(log.events_of_type("CurrencyRateDefaulted").len(), 1);
//! ```

use crate::catalog::keys::{
    AdvancedGrade, DiamondClarity, DiamondColor, GemColor, GemGrade, GemKind, LaborTier, MetalFamily,
    MetalPurity,
};
use crate::core::in_money_range;
use serde::{Deserialize, Serialize};

/// A default substituted during pricing.
///
/// `line` is the zero-based index of the stone line in the quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PricingEvent {
    /// No carat bracket contained the weight; `used` is the bracket priced
    /// instead (`None` when the fallback is a zero price)
    CaratBracketFallback {
        line: usize,
        carats: f64,
        used: Option<String>,
    },

    /// Bracket matched but the color/clarity cell is absent
    DiamondPriceMissing {
        line: usize,
        bracket: String,
        color: DiamondColor,
        clarity: DiamondClarity,
    },

    /// A multiplier key was absent and 1.0 was used
    MultiplierDefaulted {
        line: usize,
        table: String,
        key: String,
    },

    /// No species entry for the gem; `used` is the entry priced instead
    GemEntryFallback {
        line: usize,
        requested: GemKind,
        used: Option<GemKind>,
    },

    /// Species entry has no price for the grade
    GradePriceMissing {
        line: usize,
        kind: GemKind,
        grade: GemGrade,
    },

    /// A specific color was chosen for a species it does not describe
    ColorMismatch {
        line: usize,
        color: GemColor,
        kind: GemKind,
    },

    /// No color/grade row in the specific-color table
    AdvancedPriceMissing {
        line: usize,
        color: GemColor,
        grade: AdvancedGrade,
    },

    /// No weight bracket contained the per-stone weight
    NoWeightBracket {
        line: usize,
        color: GemColor,
        grade: AdvancedGrade,
        per_stone_carats: f64,
    },

    /// Small-stone category has no price in the table
    SmallStonePriceMissing { line: usize, stone: String },

    /// Purity key absent; `used` is the entry priced instead
    MetalEntryMissing {
        purity: MetalPurity,
        used: Option<MetalPurity>,
    },

    /// Spot price used in place of the static catalog price
    SpotRateApplied {
        family: MetalFamily,
        spot_per_gram: f64,
        purity_fraction: f64,
    },

    /// Spot feed supplied but unusable for this metal family
    SpotRateUnavailable { family: MetalFamily },

    /// Display currency had no usable rate; 1.0 was used
    CurrencyRateDefaulted { currency: String },

    /// Labor tier absent from the fee table; 0 was used
    LaborTierMissing { tier: LaborTier },

    /// An amount was non-finite or beyond `MAX_MONEY` and 0 was used.
    /// `component` is `stone`, `metal`, `labor`, `packaging`, `stones`,
    /// `cost` or `quote`; `line` is set for stone lines only.
    AmountOutOfRange {
        component: String,
        line: Option<usize>,
    },
}

impl PricingEvent {
    /// Stone line this event concerns, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            PricingEvent::CaratBracketFallback { line, .. }
            | PricingEvent::DiamondPriceMissing { line, .. }
            | PricingEvent::MultiplierDefaulted { line, .. }
            | PricingEvent::GemEntryFallback { line, .. }
            | PricingEvent::GradePriceMissing { line, .. }
            | PricingEvent::ColorMismatch { line, .. }
            | PricingEvent::AdvancedPriceMissing { line, .. }
            | PricingEvent::NoWeightBracket { line, .. }
            | PricingEvent::SmallStonePriceMissing { line, .. } => Some(*line),
            PricingEvent::MetalEntryMissing { .. }
            | PricingEvent::SpotRateApplied { .. }
            | PricingEvent::SpotRateUnavailable { .. }
            | PricingEvent::CurrencyRateDefaulted { .. }
            | PricingEvent::LaborTierMissing { .. } => None,
            PricingEvent::AmountOutOfRange { line, .. } => *line,
        }
    }

    /// Get event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            PricingEvent::CaratBracketFallback { .. } => "CaratBracketFallback",
            PricingEvent::DiamondPriceMissing { .. } => "DiamondPriceMissing",
            PricingEvent::MultiplierDefaulted { .. } => "MultiplierDefaulted",
            PricingEvent::GemEntryFallback { .. } => "GemEntryFallback",
            PricingEvent::GradePriceMissing { .. } => "GradePriceMissing",
            PricingEvent::ColorMismatch { .. } => "ColorMismatch",
            PricingEvent::AdvancedPriceMissing { .. } => "AdvancedPriceMissing",
            PricingEvent::NoWeightBracket { .. } => "NoWeightBracket",
            PricingEvent::SmallStonePriceMissing { .. } => "SmallStonePriceMissing",
            PricingEvent::MetalEntryMissing { .. } => "MetalEntryMissing",
            PricingEvent::SpotRateApplied { .. } => "SpotRateApplied",
            PricingEvent::SpotRateUnavailable { .. } => "SpotRateUnavailable",
            PricingEvent::CurrencyRateDefaulted { .. } => "CurrencyRateDefaulted",
            PricingEvent::LaborTierMissing { .. } => "LaborTierMissing",
            PricingEvent::AmountOutOfRange { .. } => "AmountOutOfRange",
        }
    }
}

/// Ordered record of the events raised during one pricing run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog {
    events: Vec<PricingEvent>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: PricingEvent) {
        tracing::debug!(event_type = event.event_type(), ?event, "pricing fallback");
        self.events.push(event);
    }

    /// Pass an in-range amount through; otherwise log it and return 0
    pub fn bound_amount(&mut self, value: f64, component: &str, line: Option<usize>) -> f64 {
        if in_money_range(value) {
            return value;
        }
        self.log(PricingEvent::AmountOutOfRange {
            component: component.to_string(),
            line,
        });
        0.0
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events
    pub fn events(&self) -> &[PricingEvent] {
        &self.events
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&PricingEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Get events for a specific stone line
    pub fn events_for_line(&self, line: usize) -> Vec<&PricingEvent> {
        self.events
            .iter()
            .filter(|e| e.line() == Some(line))
            .collect()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
