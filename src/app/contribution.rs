use rust_decimal::Decimal;

use crate::{
    error::{CoherenceError, CoherenceResult},
    models::{
        AllocationFocus, AssetClass, ContributionPlan, RankedInstrument, RebalanceReport,
        Suggestion, SuggestionReason,
    },
};

/// Number of top-ranked candidates considered for one contribution.
pub const MAX_CANDIDATES: usize = 3;

/// Greedy buy list for a new cash contribution.
///
/// When the largest allocation gap is positive, candidates are limited to
/// that asset class; otherwise the whole ranked list is used. The first
/// `MAX_CANDIDATES` candidates are taken in the order given. A fixed-income
/// candidate in first position absorbs all of the cash as a single unit.
/// Every other candidate gets roughly an equal share, capped by what the
/// remaining cash can afford. This is a heuristic, not an optimal fill.
pub fn allocate(
    cash_amount: Decimal,
    report: &RebalanceReport,
    candidates: &[RankedInstrument],
) -> CoherenceResult<ContributionPlan> {
    if cash_amount <= Decimal::ZERO {
        return Err(CoherenceError::NonPositiveCash(cash_amount));
    }

    let focus = if report.top_gap() > Decimal::ZERO {
        AllocationFocus::AssetClass(*report.priority_class())
    } else {
        AllocationFocus::Diversification
    };

    let pool: Vec<&RankedInstrument> = candidates
        .iter()
        .filter(|candidate| match focus {
            AllocationFocus::AssetClass(asset_class) => *candidate.asset_class() == asset_class,
            AllocationFocus::Diversification => true,
        })
        .take(MAX_CANDIDATES)
        .collect();

    let mut suggestions = Vec::new();
    let mut remaining = cash_amount;
    let candidate_count = Decimal::from(pool.len());

    for (position, candidate) in pool.iter().enumerate() {
        if *candidate.asset_class() == AssetClass::FixedIncome {
            if position == 0 {
                suggestions.push(Suggestion::new(
                    candidate.ticker().clone(),
                    Decimal::ONE,
                    remaining,
                    SuggestionReason::SafeOption,
                ));
                break;
            }
            tracing::debug!(ticker = %candidate.ticker(), "fixed income only taken in first position");
            continue;
        }

        let price = *candidate.price();
        if price <= Decimal::ZERO {
            tracing::warn!(ticker = %candidate.ticker(), "candidate has no price; skipped");
            continue;
        }

        let max_affordable = (remaining / price).floor();
        let target = (cash_amount / candidate_count / price).floor() + Decimal::ONE;
        let quantity = max_affordable.min(target);

        if quantity > Decimal::ZERO {
            let cost = quantity * price;
            remaining -= cost;
            suggestions.push(Suggestion::new(
                candidate.ticker().clone(),
                quantity,
                cost,
                SuggestionReason::TopRanked,
            ));
        }
    }

    tracing::debug!(
        %focus,
        suggestions = suggestions.len(),
        %remaining,
        "allocated contribution"
    );

    Ok(ContributionPlan::new(focus, focus.to_string(), suggestions))
}
