use std::fmt;

use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Serialize;
use strum_macros::Display;

use super::AssetClass;

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionReason {
    #[strum(serialize = "safe option")]
    SafeOption,
    #[strum(serialize = "top ranked")]
    TopRanked,
}

#[derive(Clone, Debug, Getters, PartialEq, Serialize, new)]
pub struct Suggestion {
    ticker: String,
    quantity: Decimal,
    cost: Decimal,
    reason: SuggestionReason,
}

/// What drove the choice of candidates for a contribution.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationFocus {
    AssetClass(AssetClass),
    Diversification,
}

impl fmt::Display for AllocationFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationFocus::AssetClass(asset_class) => write!(f, "{}", asset_class.label()),
            AllocationFocus::Diversification => write!(f, "diversification"),
        }
    }
}

#[derive(Clone, Debug, Getters, PartialEq, Serialize, new)]
pub struct ContributionPlan {
    focus: AllocationFocus,
    focus_label: String,
    suggestions: Vec<Suggestion>,
}

impl ContributionPlan {
    pub fn total_cost(&self) -> Decimal {
        self.suggestions
            .iter()
            .fold(Decimal::ZERO, |sum, suggestion| sum + suggestion.cost)
    }
}
