//! Labor cost: flat tier fee (converted) or an entered fee

use crate::catalog::keys::PriceMode;
use crate::catalog::PricingView;
use crate::models::event::{EventLog, PricingEvent};
use crate::models::labor::LaborSpec;
use crate::pricing::currency::CurrencyAdjuster;

pub fn labor_cost(
    view: &PricingView<'_>,
    spec: &LaborSpec,
    fx: &CurrencyAdjuster,
    events: &mut EventLog,
) -> f64 {
    match spec.mode {
        PriceMode::Manual => spec.manual_fee.value(),
        PriceMode::Auto => match view.labor.get(&spec.tier) {
            Some(fee) => fx.convert(*fee),
            None => {
                events.log(PricingEvent::LaborTierMissing { tier: spec.tier });
                0.0
            }
        },
    }
}
