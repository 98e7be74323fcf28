use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

use crate::{
    app::calc::total_value,
    models::{Holding, score::clamp_score},
};

/// Value-weighted average of per-holding scores, rounded half away from zero.
///
/// Holdings without a score fall back to `default_score`. An empty or
/// zero-valued portfolio scores 0.
pub fn aggregate<F>(holdings: &[Holding], score_lookup: F, default_score: u8) -> u8
where
    F: Fn(&str) -> Option<u8>,
{
    let portfolio_value = total_value(holdings);
    if portfolio_value <= Decimal::ZERO {
        return 0;
    }

    let weighted_sum = holdings.iter().fold(Decimal::ZERO, |sum, holding| {
        let score = score_lookup(holding.ticker().as_str()).unwrap_or(default_score);
        sum + Decimal::from(score) * *holding.total_value()
    });

    let average = (weighted_sum / portfolio_value)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    clamp_score(average.to_i32().unwrap_or_default())
}
