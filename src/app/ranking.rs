use std::collections::HashMap;

use crate::models::{Quote, RankedInstrument, ScoreRecord, score::clamp_score};

/// Merges a quote snapshot with score records into the ranked list consumed
/// by the allocator: best score first, ties broken by ticker.
pub fn rank(quotes: &[Quote], scores: &[ScoreRecord], default_score: u8) -> Vec<RankedInstrument> {
    let by_ticker: HashMap<&str, &ScoreRecord> = scores
        .iter()
        .map(|record| (record.ticker().as_str(), record))
        .collect();

    let mut ranked: Vec<RankedInstrument> = quotes
        .iter()
        .map(|quote| {
            let (score, badges) = match by_ticker.get(quote.ticker().as_str()) {
                Some(record) => (*record.clamped_score(), record.badges().clone()),
                None => (clamp_score(default_score.into()), Vec::new()),
            };

            RankedInstrument::new(
                quote.ticker().clone(),
                quote.name().clone(),
                *quote.price(),
                *quote.asset_class(),
                score,
                badges,
            )
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score()
            .cmp(a.score())
            .then_with(|| a.ticker().cmp(b.ticker()))
    });

    ranked
}
