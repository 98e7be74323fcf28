use std::collections::{BTreeMap, BTreeSet};

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Membership in one certification index, worth `weight` points.
#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct BonusRule {
    code: String,
    weight: i32,
    #[serde(default)]
    source: String,
    members: BTreeSet<String>,
}

impl BonusRule {
    pub fn contains(&self, ticker: &str) -> bool {
        self.members.contains(ticker)
    }
}

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct Penalty {
    description: String,
    value: i32,
    source: String,
}

/// Scoring policy: bonus rules in evaluation order, badge aliases and the
/// penalty dossier keyed by ticker.
#[derive(Clone, Debug, Default, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct RuleTable {
    #[serde(default)]
    bonus_rules: Vec<BonusRule>,
    #[serde(default)]
    aliases: BTreeMap<String, String>,
    #[serde(default)]
    penalties: BTreeMap<String, Vec<Penalty>>,
}

impl RuleTable {
    /// Every ticker named by a bonus rule or the penalty dossier.
    pub fn universe(&self) -> BTreeSet<String> {
        self.bonus_rules
            .iter()
            .flat_map(|rule| rule.members.iter().cloned())
            .chain(self.penalties.keys().cloned())
            .collect()
    }

    pub fn canonical_code<'a>(&'a self, code: &'a str) -> &'a str {
        self.aliases.get(code).map(String::as_str).unwrap_or(code)
    }

    pub fn penalties_for(&self, ticker: &str) -> &[Penalty] {
        self.penalties
            .get(ticker)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
