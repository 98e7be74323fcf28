use crate::models::{
    EvidenceEntry, EvidenceKind, RuleTable, ScoreRecord,
    score::{ALERT_BADGE, NEUTRAL_SCORE},
};

/// Scores every ticker in the rule table's universe, in ticker order.
pub fn score_universe(rules: &RuleTable) -> Vec<ScoreRecord> {
    rules
        .universe()
        .into_iter()
        .map(|ticker| score_ticker(&ticker, rules))
        .collect()
}

/// Starts from the neutral midpoint, adds bonuses in rule order, then applies
/// penalties in dossier order. A badge whose canonical code was already
/// awarded is not counted a second time.
pub fn score_ticker(ticker: &str, rules: &RuleTable) -> ScoreRecord {
    let mut raw_score = NEUTRAL_SCORE;
    let mut badges: Vec<String> = Vec::new();
    let mut evidence_log = vec![EvidenceEntry::new(
        EvidenceKind::Base,
        String::from("Neutral starting score"),
        NEUTRAL_SCORE,
        String::from("baseline"),
    )];

    for rule in rules.bonus_rules() {
        if !rule.contains(ticker) {
            continue;
        }

        let badge = rules.canonical_code(rule.code());
        if badges.iter().any(|b| b == badge) {
            tracing::debug!(ticker, code = %rule.code(), badge, "badge already awarded");
            continue;
        }

        raw_score = raw_score.saturating_add(*rule.weight());
        badges.push(badge.to_string());
        evidence_log.push(EvidenceEntry::new(
            EvidenceKind::Bonus,
            format!("Member of {}", badge),
            *rule.weight(),
            rule.source().clone(),
        ));
    }

    for penalty in rules.penalties_for(ticker) {
        raw_score = raw_score.saturating_add(*penalty.value());
        badges.push(ALERT_BADGE.to_string());
        evidence_log.push(EvidenceEntry::new(
            EvidenceKind::Penalty,
            penalty.description().clone(),
            *penalty.value(),
            penalty.source().clone(),
        ));
    }

    let record = ScoreRecord::new(ticker.to_string(), raw_score, badges, evidence_log);
    tracing::debug!(
        ticker,
        raw_score,
        clamped_score = record.clamped_score(),
        "scored ticker"
    );
    record
}
