use anyhow::{Context, Error, Result};
use csv::Reader;
use rust_decimal::Decimal;

use crate::{
    app::{
        calc, coherence, contribution, rebalance,
        utils::{expand_path, parse_datetime, parse_decimal, parse_i64},
        validation::{normalize_ticker, validate_ledger, validate_transaction},
    },
    error::CoherenceError,
    models::{
        ContributionPlan, Holding, InstrumentIndex, RankedInstrument, RebalanceReport,
        RiskProfile, Transaction, TransactionType,
    },
};

/// Owns the ordered transaction history and the latest ranked snapshot.
/// Holdings are recomputed whenever either of them changes.
#[derive(Clone, Debug)]
pub struct Portfolio {
    transactions: Vec<Transaction>,
    instruments: Vec<RankedInstrument>,
    holdings: Vec<Holding>,
    default_score: u8,
}

impl Portfolio {
    pub fn new(default_score: u8) -> Self {
        Self {
            transactions: Vec::new(),
            instruments: Vec::new(),
            holdings: Vec::new(),
            default_score,
        }
    }

    /// Reads `id,date,type,ticker,quantity,price` rows in file order. Rows with
    /// an unknown type are skipped; any other malformed row, or a sale of more
    /// units than held, fails the whole import and leaves the ledger untouched.
    pub fn import_transactions(&mut self, path: &str) -> Result<usize> {
        let path = expand_path(path);
        let mut reader = Reader::from_path(&path)
            .with_context(|| format!("Failed to open CSV file at path: {}", path))?;

        let mut imported = Vec::new();

        for (row_idx, record) in reader.records().enumerate() {
            let row = row_idx + 1;
            let rec =
                record.with_context(|| format!("Failed to read CSV record at row {}", row))?;

            if rec.len() < 6 {
                return Err(Error::msg(format!(
                    "Invalid CSV format at row {}: expected at least 6 columns, found {}",
                    row,
                    rec.len()
                )));
            }

            let transaction_type = match TransactionType::parse_str(&rec[2]) {
                Ok(transaction_type) => transaction_type,
                Err(err) => {
                    tracing::warn!(row, error = %err, "skipping row with unknown transaction type");
                    continue;
                }
            };

            let id = parse_i64(&rec[0], "id").with_context(|| format!("Row {}", row))?;
            let date = parse_datetime(&rec[1]).with_context(|| format!("Row {}", row))?;
            let ticker = normalize_ticker(&rec[3]);
            let quantity =
                parse_decimal(&rec[4], "quantity").with_context(|| format!("Row {}", row))?;
            let price = parse_decimal(&rec[5], "price").with_context(|| format!("Row {}", row))?;

            let transaction = Transaction::new(id, ticker, transaction_type, quantity, price, date);
            validate_transaction(&transaction).with_context(|| format!("Row {}", row))?;
            imported.push(transaction);
        }

        let mut candidate = self.transactions.clone();
        candidate.extend(imported.iter().cloned());
        validate_ledger(&candidate).with_context(|| format!("Importing {}", path))?;

        let count = imported.len();
        self.transactions = candidate;
        self.set_holdings();
        tracing::info!(path = %path, count, "imported transactions");

        Ok(count)
    }

    /// Appends one transaction after checking it against the ledger so far.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<()> {
        validate_transaction(&transaction)?;

        if *transaction.transaction_type() == TransactionType::Sell {
            let held = calc::accumulate(&self.transactions)
                .get(transaction.ticker())
                .map(|state| *state.quantity())
                .unwrap_or(Decimal::ZERO);
            if *transaction.quantity() > held {
                return Err(CoherenceError::Oversell {
                    id: *transaction.id(),
                    ticker: transaction.ticker().clone(),
                    held,
                    requested: *transaction.quantity(),
                }
                .into());
            }
        }

        self.transactions.push(transaction);
        self.set_holdings();
        Ok(())
    }

    pub fn transactions(&self) -> &Vec<Transaction> {
        &self.transactions
    }

    pub fn instruments(&self) -> &Vec<RankedInstrument> {
        &self.instruments
    }

    pub fn set_instruments(&mut self, instruments: Vec<RankedInstrument>) {
        self.instruments = instruments;
        self.set_holdings();
    }

    pub fn holdings(&self) -> &Vec<Holding> {
        &self.holdings
    }

    pub fn set_holdings(&mut self) {
        let index = InstrumentIndex::from_slice(&self.instruments);
        self.holdings = calc::reduce(&self.transactions, &index);
    }

    pub fn total_value(&self) -> Decimal {
        calc::total_value(&self.holdings)
    }

    pub fn coherence_score(&self) -> u8 {
        let index = InstrumentIndex::from_slice(&self.instruments);
        coherence::aggregate(
            &self.holdings,
            |ticker| index.score_of(ticker),
            self.default_score,
        )
    }

    pub fn rebalance(&self, profile: RiskProfile) -> RebalanceReport {
        rebalance::rebalance(&self.holdings, profile)
    }

    pub fn suggest_contribution(
        &self,
        cash_amount: Decimal,
        profile: RiskProfile,
    ) -> Result<ContributionPlan> {
        let report = self.rebalance(profile);
        Ok(contribution::allocate(
            cash_amount,
            &report,
            &self.instruments,
        )?)
    }
}
