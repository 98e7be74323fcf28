use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{
    AssetClass, Holding, InstrumentIndex, PositionState, Transaction, TransactionType,
};

/// Replays transactions in the order given, using weighted-average cost on
/// sales. Returns one state per ticker, including closed and over-sold ones.
pub fn accumulate(transactions: &[Transaction]) -> HashMap<String, PositionState> {
    let mut states: HashMap<String, PositionState> = HashMap::new();

    for transaction in transactions {
        let state = states.entry(transaction.ticker().clone()).or_default();
        match transaction.transaction_type() {
            TransactionType::Buy => state.buy(*transaction.quantity(), *transaction.price()),
            TransactionType::Sell => state.sell(*transaction.quantity()),
        }
    }

    states
}

/// Reduces the ledger into open holdings valued against the snapshot.
///
/// Tickers missing from the snapshot are valued at zero rather than failing.
/// Fixed income is marked at cost. Positions with a non-positive quantity are
/// dropped, which is also where over-sold positions end up when the ledger was
/// not validated beforehand.
pub fn reduce(transactions: &[Transaction], instruments: &InstrumentIndex) -> Vec<Holding> {
    let mut holdings = Vec::new();

    for (ticker, state) in accumulate(transactions) {
        if !state.is_open() {
            if *state.quantity() < Decimal::ZERO {
                tracing::warn!(
                    %ticker,
                    quantity = %state.quantity(),
                    "position sold below zero; excluded from holdings"
                );
            }
            continue;
        }

        let instrument = instruments.get(&ticker);
        let asset_class = instrument
            .map(|i| *i.asset_class())
            .unwrap_or_default();

        let quantity = *state.quantity();
        let total_cost = *state.total_cost();

        let (current_price, total_value) = if asset_class.is_marked_at_cost() {
            (total_cost / quantity, total_cost)
        } else {
            let price = instrument.map(|i| *i.price()).unwrap_or(Decimal::ZERO);
            (price, quantity * price)
        };

        let profit = total_value - total_cost;
        let profit_percent = if total_cost > Decimal::ZERO {
            profit / total_cost * dec!(100)
        } else {
            Decimal::ZERO
        };

        holdings.push(Holding::new(
            ticker,
            asset_class,
            quantity,
            state.average_cost(),
            current_price,
            total_cost,
            total_value,
            profit,
            profit_percent,
            Decimal::ZERO,
        ));
    }

    let portfolio_value = total_value(&holdings);
    for holding in holdings.iter_mut() {
        let allocation_percent = if portfolio_value > Decimal::ZERO {
            *holding.total_value() / portfolio_value * dec!(100)
        } else {
            Decimal::ZERO
        };
        holding.set_allocation_percent(allocation_percent);
    }

    holdings.sort_by(|a, b| {
        b.total_value()
            .cmp(a.total_value())
            .then_with(|| a.ticker().cmp(b.ticker()))
    });

    holdings
}

pub fn total_value(holdings: &[Holding]) -> Decimal {
    holdings
        .iter()
        .fold(Decimal::ZERO, |sum, holding| sum + *holding.total_value())
}

/// Sum of holding values per asset class.
pub fn value_by_class(holdings: &[Holding]) -> HashMap<AssetClass, Decimal> {
    let mut values = HashMap::new();
    for holding in holdings {
        *values.entry(*holding.asset_class()).or_insert(Decimal::ZERO) += *holding.total_value();
    }
    values
}
