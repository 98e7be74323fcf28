use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use strum::IntoEnumIterator;

use crate::{
    app::calc::{total_value, value_by_class},
    models::{AllocationTarget, AssetClass, Holding, RebalanceReport, RiskProfile},
};

/// Summed absolute gap, in percentage points, below which a portfolio counts
/// as balanced.
pub const BALANCE_THRESHOLD: Decimal = dec!(20);

/// Current allocation per asset class, in percent of portfolio value.
pub fn current_allocation(holdings: &[Holding]) -> AllocationTarget {
    let portfolio_value = total_value(holdings);
    let values = value_by_class(holdings);

    let percent_of = |asset_class: AssetClass| {
        if portfolio_value > Decimal::ZERO {
            values.get(&asset_class).copied().unwrap_or(Decimal::ZERO) / portfolio_value
                * dec!(100)
        } else {
            Decimal::ZERO
        }
    };

    AllocationTarget::new(
        percent_of(AssetClass::FixedIncome),
        percent_of(AssetClass::Fund),
        percent_of(AssetClass::Stock),
    )
}

pub fn rebalance(holdings: &[Holding], profile: RiskProfile) -> RebalanceReport {
    let current = current_allocation(holdings);
    let target = AllocationTarget::for_profile(profile);
    let gaps = AllocationTarget::new(
        *target.fixed_income_pct() - *current.fixed_income_pct(),
        *target.fund_pct() - *current.fund_pct(),
        *target.stock_pct() - *current.stock_pct(),
    );

    // Iteration follows the tie-break precedence; only a strictly larger gap
    // displaces the current leader.
    let mut priority_class = AssetClass::FixedIncome;
    for asset_class in AssetClass::iter() {
        if gaps.get(asset_class) > gaps.get(priority_class) {
            priority_class = asset_class;
        }
    }

    let total_gap: Decimal = AssetClass::iter().map(|c| gaps.get(c).abs()).sum();
    let is_balanced = total_gap < BALANCE_THRESHOLD;

    tracing::debug!(
        %profile,
        %priority_class,
        %total_gap,
        is_balanced,
        "computed rebalance report"
    );

    RebalanceReport::new(profile, current, target, gaps, is_balanced, priority_class)
}
