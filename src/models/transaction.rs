use anyhow::Result;
use chrono::{DateTime, Local};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Getters, PartialEq, Serialize, new)]
pub struct Transaction {
    id: i64,
    ticker: String,
    transaction_type: TransactionType,
    quantity: Decimal,
    price: Decimal,
    date: DateTime<Local>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Buy,
    Sell,
}

impl TransactionType {
    pub fn parse_str(s: &str) -> Result<TransactionType> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" => Ok(TransactionType::Buy),
            "SELL" => Ok(TransactionType::Sell),
            other => Err(anyhow::anyhow!("Unknown transaction type '{}'", other)),
        }
    }
}
