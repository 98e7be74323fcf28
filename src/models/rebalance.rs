use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{AllocationTarget, AssetClass, RiskProfile};

#[derive(Clone, Debug, Getters, PartialEq, Serialize, new)]
pub struct RebalanceReport {
    profile: RiskProfile,
    current: AllocationTarget,
    target: AllocationTarget,
    /// Target minus current, per class. Positive means under-allocated.
    gaps: AllocationTarget,
    is_balanced: bool,
    priority_class: AssetClass,
}

impl RebalanceReport {
    pub fn top_gap(&self) -> Decimal {
        self.gaps.get(self.priority_class)
    }
}
