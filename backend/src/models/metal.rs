//! Precious metal selection

use crate::catalog::keys::{MetalPurity, PriceMode, SpecialColor};
use crate::core::NumericField;
use serde::{Deserialize, Serialize};

/// Metal part of a quote
///
/// In auto mode `price_per_gram` and `loss_rate` are ignored and the
/// catalog (or a spot feed) supplies them. `extra_fee` is always charged,
/// in the display currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetalSpec {
    pub purity: MetalPurity,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_color: Option<SpecialColor>,

    pub weight_g: NumericField,

    pub price_mode: PriceMode,

    /// Manual price per gram, display currency
    pub price_per_gram: NumericField,

    /// Manual loss rate in percent (15 = 15%)
    pub loss_rate: NumericField,

    pub extra_fee: NumericField,
}

impl MetalSpec {
    pub fn new(purity: MetalPurity, weight_g: impl Into<NumericField>) -> Self {
        Self {
            purity,
            weight_g: weight_g.into(),
            ..Self::default()
        }
    }
}
