//! Packaging fees, passed through unchanged

use crate::core::NumericField;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackagingSpec {
    pub pack_fee: NumericField,

    /// Certificate or tag fee
    pub cert_fee: NumericField,
}

impl PackagingSpec {
    pub fn subtotal(&self) -> f64 {
        self.pack_fee.value() + self.cert_fee.value()
    }
}
