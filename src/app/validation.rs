use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;
use rust_decimal::Decimal;

use crate::{
    error::{CoherenceError, CoherenceResult},
    models::{PositionState, RuleTable, Transaction, TransactionType},
};

static TICKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9][A-Z0-9.\-]{0,15}$").expect("ticker pattern"));

pub fn normalize_ticker(ticker: &str) -> String {
    ticker.trim().to_ascii_uppercase()
}

pub fn is_valid_ticker(ticker: &str) -> bool {
    TICKER_PATTERN.is_match(ticker)
}

/// Checks the fields of a single transaction in isolation.
pub fn validate_transaction(transaction: &Transaction) -> CoherenceResult<()> {
    let id = *transaction.id();
    let ticker = transaction.ticker();

    if !is_valid_ticker(ticker) {
        return Err(CoherenceError::InvalidTicker {
            id,
            ticker: ticker.clone(),
        });
    }

    if *transaction.quantity() <= Decimal::ZERO {
        return Err(CoherenceError::NonPositiveQuantity {
            id,
            ticker: ticker.clone(),
            quantity: *transaction.quantity(),
        });
    }

    if *transaction.price() <= Decimal::ZERO {
        return Err(CoherenceError::NonPositivePrice {
            id,
            ticker: ticker.clone(),
            price: *transaction.price(),
        });
    }

    Ok(())
}

/// Replays the ledger in the given order and rejects the first malformed
/// transaction or the first sale of more units than are held at that point.
pub fn validate_ledger(transactions: &[Transaction]) -> CoherenceResult<()> {
    let mut held: HashMap<&str, PositionState> = HashMap::new();

    for transaction in transactions {
        validate_transaction(transaction)?;

        let state = held.entry(transaction.ticker().as_str()).or_default();
        match transaction.transaction_type() {
            TransactionType::Buy => state.buy(*transaction.quantity(), *transaction.price()),
            TransactionType::Sell => {
                if transaction.quantity() > state.quantity() {
                    return Err(CoherenceError::Oversell {
                        id: *transaction.id(),
                        ticker: transaction.ticker().clone(),
                        held: *state.quantity(),
                        requested: *transaction.quantity(),
                    });
                }
                state.sell(*transaction.quantity());
            }
        }
    }

    Ok(())
}

/// Rule tables must only add through bonuses and only subtract through penalties.
pub fn validate_rule_table(rules: &RuleTable) -> CoherenceResult<()> {
    for rule in rules.bonus_rules() {
        if *rule.weight() <= 0 {
            return Err(CoherenceError::NonPositiveWeight {
                code: rule.code().clone(),
                weight: *rule.weight(),
            });
        }
    }

    for (ticker, penalties) in rules.penalties() {
        if let Some(penalty) = penalties.iter().find(|p| *p.value() > 0) {
            return Err(CoherenceError::PositivePenalty {
                ticker: ticker.clone(),
                value: *penalty.value(),
            });
        }
    }

    Ok(())
}
