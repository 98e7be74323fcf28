use derive_getters::Getters;
use serde::{Deserialize, Serialize};

use super::EvidenceEntry;

pub const NEUTRAL_SCORE: i32 = 50;
pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

/// Badge appended once per penalty applied to a ticker.
pub const ALERT_BADGE: &str = "ALERT";

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize)]
pub struct ScoreRecord {
    ticker: String,
    raw_score: i32,
    clamped_score: u8,
    badges: Vec<String>,
    evidence_log: Vec<EvidenceEntry>,
}

impl ScoreRecord {
    /// Builds a record, deriving the clamped score from the raw one.
    pub fn new(
        ticker: String,
        raw_score: i32,
        badges: Vec<String>,
        evidence_log: Vec<EvidenceEntry>,
    ) -> Self {
        Self {
            ticker,
            raw_score,
            clamped_score: clamp_score(raw_score),
            badges,
            evidence_log,
        }
    }
}

pub fn clamp_score(raw_score: i32) -> u8 {
    // The clamp bounds fit in u8, so the cast cannot truncate.
    raw_score.clamp(MIN_SCORE, MAX_SCORE) as u8
}
