mod coherence;
mod ranking;
mod snapshot;
mod validation;

use rust_decimal::Decimal;

use crate::{
    app::utils::parse_datetime,
    models::{AssetClass, Holding, RankedInstrument, Transaction, TransactionType},
};

pub fn buy(id: i64, ticker: &str, quantity: Decimal, price: Decimal) -> Transaction {
    transaction(id, ticker, TransactionType::Buy, quantity, price)
}

pub fn sell(id: i64, ticker: &str, quantity: Decimal, price: Decimal) -> Transaction {
    transaction(id, ticker, TransactionType::Sell, quantity, price)
}

fn transaction(
    id: i64,
    ticker: &str,
    transaction_type: TransactionType,
    quantity: Decimal,
    price: Decimal,
) -> Transaction {
    Transaction::new(
        id,
        ticker.to_string(),
        transaction_type,
        quantity,
        price,
        parse_datetime("2024-03-01").unwrap(),
    )
}

pub fn instrument(
    ticker: &str,
    price: Decimal,
    asset_class: AssetClass,
    score: u8,
) -> RankedInstrument {
    RankedInstrument::new(
        ticker.to_string(),
        format!("{} Inc.", ticker),
        price,
        asset_class,
        score,
        Vec::new(),
    )
}

/// A holding carrying only what the aggregator and rebalancer read.
pub fn holding(ticker: &str, asset_class: AssetClass, total_value: Decimal) -> Holding {
    Holding::new(
        ticker.to_string(),
        asset_class,
        Decimal::ONE,
        total_value,
        total_value,
        total_value,
        total_value,
        Decimal::ZERO,
        Decimal::ZERO,
        Decimal::ZERO,
    )
}
