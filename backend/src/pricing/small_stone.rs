//! Flat-rate pricing for commodity side stones

use crate::catalog::tables::SmallStoneTable;
use crate::models::event::{EventLog, PricingEvent};
use crate::models::stone::SmallStone;
use serde::{Deserialize, Serialize};

/// What a unit price is charged against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingBasis {
    /// Multiplied by the resolved total carats
    #[default]
    PerCarat,
    /// Multiplied by the stone count
    PerPiece,
}

/// USD unit price and its basis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmallStonePrice {
    pub unit_price: f64,
    pub basis: PricingBasis,
}

pub fn small_stone_price(
    table: &SmallStoneTable,
    stone: &SmallStone,
    line: usize,
    events: &mut EventLog,
) -> SmallStonePrice {
    let basis = if stone.per_piece() {
        PricingBasis::PerPiece
    } else {
        PricingBasis::PerCarat
    };

    let price = match stone {
        SmallStone::DiamondStandard { quality } => table.diamond_standard.get(quality).copied(),
        SmallStone::DiamondSingleCut => Some(table.diamond_single_cut),
        SmallStone::Zircon => Some(table.zircon_per_piece),
        SmallStone::Moissanite { setting } => table.moissanite.get(setting).copied(),
    };

    let unit_price = price.unwrap_or_else(|| {
        events.log(PricingEvent::SmallStonePriceMissing {
            line,
            stone: stone.label(),
        });
        0.0
    });

    SmallStonePrice { unit_price, basis }
}
