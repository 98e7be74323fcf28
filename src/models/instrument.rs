use std::collections::HashMap;

use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AssetClass;

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct RankedInstrument {
    ticker: String,
    name: String,
    price: Decimal,
    asset_class: AssetClass,
    score: u8,
    #[serde(default)]
    badges: Vec<String>,
}

/// Ticker lookup over a ranked snapshot.
#[derive(Clone, Debug, Default)]
pub struct InstrumentIndex<'a> {
    by_ticker: HashMap<&'a str, &'a RankedInstrument>,
}

impl<'a> InstrumentIndex<'a> {
    pub fn from_slice(instruments: &'a [RankedInstrument]) -> Self {
        let mut by_ticker = HashMap::with_capacity(instruments.len());
        for instrument in instruments {
            // Keep the first listed entry when a ticker appears twice.
            by_ticker
                .entry(instrument.ticker.as_str())
                .or_insert(instrument);
        }
        Self { by_ticker }
    }

    pub fn get(&self, ticker: &str) -> Option<&'a RankedInstrument> {
        self.by_ticker.get(ticker).copied()
    }

    pub fn score_of(&self, ticker: &str) -> Option<u8> {
        self.get(ticker).map(|instrument| instrument.score)
    }
}
