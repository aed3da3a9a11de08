//! Labor selection

use crate::catalog::keys::{LaborTier, PriceMode};
use crate::core::NumericField;
use serde::{Deserialize, Serialize};

/// Making fee: a complexity tier in auto mode, an entered fee in manual mode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaborSpec {
    pub mode: PriceMode,
    pub tier: LaborTier,
    pub manual_fee: NumericField,
}

impl LaborSpec {
    pub fn tier(tier: LaborTier) -> Self {
        Self {
            tier,
            ..Self::default()
        }
    }

    pub fn manual(fee: impl Into<NumericField>) -> Self {
        Self {
            mode: PriceMode::Manual,
            manual_fee: fee.into(),
            ..Self::default()
        }
    }
}
