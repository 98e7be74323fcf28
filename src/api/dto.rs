use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    app::validation::normalize_ticker,
    models::{AssetClass, Quote, RankedInstrument},
};

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDto {
    #[serde(alias = "symbol")]
    ticker: String,
    #[serde(default)]
    name: String,
    price: Decimal,
    #[serde(alias = "type", alias = "asset_class")]
    asset_class: AssetClass,
}

impl QuoteDto {
    pub fn to_quote(&self) -> Quote {
        Quote::new(
            normalize_ticker(&self.ticker),
            self.name.clone(),
            self.price,
            self.asset_class,
        )
    }
}

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct RankedInstrumentDto {
    #[serde(alias = "symbol")]
    ticker: String,
    #[serde(default)]
    name: String,
    price: Decimal,
    #[serde(alias = "type", alias = "asset_class")]
    asset_class: AssetClass,
    score: u8,
    #[serde(default)]
    badges: Vec<String>,
}

impl RankedInstrumentDto {
    pub fn to_ranked_instrument(&self) -> RankedInstrument {
        RankedInstrument::new(
            normalize_ticker(&self.ticker),
            self.name.clone(),
            self.price,
            self.asset_class,
            self.score.min(100),
            self.badges.clone(),
        )
    }
}
