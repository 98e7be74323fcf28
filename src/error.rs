use rust_decimal::Decimal;
use thiserror::Error;

/// Data-quality problems rejected before they reach the pure engines.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CoherenceError {
    #[error("Transaction {id} ({ticker}): quantity must be positive, got {quantity}")]
    NonPositiveQuantity {
        id: i64,
        ticker: String,
        quantity: Decimal,
    },

    #[error("Transaction {id} ({ticker}): price must be positive, got {price}")]
    NonPositivePrice {
        id: i64,
        ticker: String,
        price: Decimal,
    },

    #[error("Transaction {id}: malformed ticker '{ticker}'")]
    InvalidTicker { id: i64, ticker: String },

    #[error("Transaction {id} ({ticker}): cannot sell {requested}, only {held} held")]
    Oversell {
        id: i64,
        ticker: String,
        held: Decimal,
        requested: Decimal,
    },

    #[error("Bonus rule '{code}': weight must be positive, got {weight}")]
    NonPositiveWeight { code: String, weight: i32 },

    #[error("Penalty for {ticker}: value must not be positive, got {value}")]
    PositivePenalty { ticker: String, value: i32 },

    #[error("Contribution amount must be positive, got {0}")]
    NonPositiveCash(Decimal),
}

pub type CoherenceResult<T> = Result<T, CoherenceError>;
