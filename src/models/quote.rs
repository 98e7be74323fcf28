use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AssetClass;

/// Latest market snapshot for one instrument, as delivered by the
/// market-data collaborator before any scoring has happened.
#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct Quote {
    ticker: String,
    name: String,
    price: Decimal,
    asset_class: AssetClass,
}
