use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Serialize;

use super::AssetClass;

#[derive(Clone, Debug, Getters, PartialEq, Serialize, new)]
pub struct Holding {
    ticker: String,
    asset_class: AssetClass,
    quantity: Decimal,
    average_cost: Decimal,
    current_price: Decimal,
    total_cost: Decimal,
    total_value: Decimal,
    profit: Decimal,
    profit_percent: Decimal,
    allocation_percent: Decimal,
}

impl Holding {
    pub(crate) fn set_allocation_percent(&mut self, allocation_percent: Decimal) {
        self.allocation_percent = allocation_percent;
    }
}
