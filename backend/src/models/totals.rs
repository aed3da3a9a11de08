//! Output record of a pricing run

use crate::core::cents_to_string;
use serde::{Deserialize, Serialize};

/// Six fixed 2-decimal money strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedTotals {
    pub stones_total: String,
    pub metal_sub: String,
    pub labor_sub: String,
    pub pack_sub: String,
    pub cost_total: String,
    pub quote_total: String,
}

impl ComputedTotals {
    pub fn from_cents(
        stones: i64,
        metal: i64,
        labor: i64,
        pack: i64,
        cost: i64,
        quote: i64,
    ) -> Self {
        Self {
            stones_total: cents_to_string(stones),
            metal_sub: cents_to_string(metal),
            labor_sub: cents_to_string(labor),
            pack_sub: cents_to_string(pack),
            cost_total: cents_to_string(cost),
            quote_total: cents_to_string(quote),
        }
    }
}
