use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::AssetClass;

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, EnumIter, EnumString, Eq, PartialEq, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RiskProfile {
    Conservative,
    #[default]
    Moderate,
    Bold,
}

/// Percent of portfolio value per asset class.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct AllocationTarget {
    fixed_income_pct: Decimal,
    fund_pct: Decimal,
    stock_pct: Decimal,
}

/// Target allocations as (profile, fixed income, fund, stock) in percent.
pub const TARGET_ALLOCATIONS: [(RiskProfile, Decimal, Decimal, Decimal); 3] = [
    (RiskProfile::Conservative, dec!(60), dec!(25), dec!(15)),
    (RiskProfile::Moderate, dec!(30), dec!(40), dec!(30)),
    (RiskProfile::Bold, dec!(10), dec!(30), dec!(60)),
];

impl AllocationTarget {
    pub fn for_profile(profile: RiskProfile) -> Self {
        // Rows are declared in RiskProfile order.
        let (_, fixed_income_pct, fund_pct, stock_pct) = TARGET_ALLOCATIONS[profile as usize];

        Self::new(fixed_income_pct, fund_pct, stock_pct)
    }

    pub fn get(&self, asset_class: AssetClass) -> Decimal {
        match asset_class {
            AssetClass::FixedIncome => self.fixed_income_pct,
            AssetClass::Fund => self.fund_pct,
            AssetClass::Stock => self.stock_pct,
        }
    }

    pub fn total(&self) -> Decimal {
        self.fixed_income_pct + self.fund_pct + self.stock_pct
    }
}
