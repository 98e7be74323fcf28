use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Asset classes tracked by the rebalancer.
///
/// Declaration order is the tie-break precedence used when two allocation
/// gaps are equal: fixed income first, then funds, then stocks.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AssetClass {
    FixedIncome,
    Fund,
    #[default]
    Stock,
}

impl AssetClass {
    pub fn label(&self) -> &str {
        match self {
            AssetClass::FixedIncome => "fixed income",
            AssetClass::Fund => "funds",
            AssetClass::Stock => "stocks",
        }
    }

    /// Fixed income is marked at cost rather than at a market price.
    pub fn is_marked_at_cost(&self) -> bool {
        *self == AssetClass::FixedIncome
    }
}
