use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// Running totals for one ticker while the ledger is replayed.
#[derive(Clone, Debug, Default, Getters, PartialEq, new)]
pub struct PositionState {
    quantity: Decimal,
    total_cost: Decimal,
}

impl PositionState {
    pub fn average_cost(&self) -> Decimal {
        if self.quantity > Decimal::ZERO {
            self.total_cost / self.quantity
        } else {
            Decimal::ZERO
        }
    }

    pub fn buy(&mut self, quantity: Decimal, price: Decimal) {
        self.quantity += quantity;
        self.total_cost += quantity * price;
    }

    /// Removes units at the average cost held before the sale. Over-selling
    /// is not rejected here; it leaves a non-positive quantity behind.
    pub fn sell(&mut self, quantity: Decimal) {
        let average_cost = self.average_cost();
        self.quantity -= quantity;
        self.total_cost -= quantity * average_cost;
    }

    pub fn is_open(&self) -> bool {
        self.quantity > Decimal::ZERO
    }
}
