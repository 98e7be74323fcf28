use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EvidenceKind {
    Base,
    Bonus,
    Penalty,
}

/// One score-affecting step, with the source it was taken from.
#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct EvidenceEntry {
    kind: EvidenceKind,
    description: String,
    value: i32,
    source: String,
}
