use std::collections::BTreeMap;

use anyhow::{Context, Result};

use super::{
    dto::{QuoteDto, RankedInstrumentDto},
    utils::{parse_response_array, parse_response_object, read_json},
};
use crate::{
    app::validation::{normalize_ticker, validate_rule_table},
    models::{BonusRule, Quote, RankedInstrument, RuleTable},
};

pub fn load_quotes(path: &str) -> Result<Vec<Quote>> {
    let data = read_json(path)?;
    let dtos: Vec<QuoteDto> =
        parse_response_array(data, &format!("No quotes found in {}", path))?;

    Ok(dtos.iter().map(QuoteDto::to_quote).collect())
}

/// Loads an already ranked snapshot; its order is kept as the rank order.
pub fn load_ranked_instruments(path: &str) -> Result<Vec<RankedInstrument>> {
    let data = read_json(path)?;
    let dtos: Vec<RankedInstrumentDto> =
        parse_response_array(data, &format!("No instruments found in {}", path))?;

    Ok(dtos
        .iter()
        .map(RankedInstrumentDto::to_ranked_instrument)
        .collect())
}

pub fn load_rule_table(path: &str) -> Result<RuleTable> {
    let data = read_json(path)?;
    let rules: RuleTable =
        parse_response_object(data, &format!("Invalid rule table in {}", path))?;
    let rules = normalize_rule_table(rules);

    validate_rule_table(&rules).with_context(|| format!("Rejected rule table {}", path))?;

    Ok(rules)
}

/// Upper-cases every ticker so rule membership matches ledger tickers.
pub fn normalize_rule_table(rules: RuleTable) -> RuleTable {
    let bonus_rules = rules
        .bonus_rules()
        .iter()
        .map(|rule| {
            BonusRule::new(
                rule.code().clone(),
                *rule.weight(),
                rule.source().clone(),
                rule.members().iter().map(|t| normalize_ticker(t)).collect(),
            )
        })
        .collect();

    let mut penalties = BTreeMap::new();
    for (ticker, dossier) in rules.penalties() {
        penalties
            .entry(normalize_ticker(ticker))
            .or_insert_with(Vec::new)
            .extend(dossier.iter().cloned());
    }

    RuleTable::new(bonus_rules, rules.aliases().clone(), penalties)
}
