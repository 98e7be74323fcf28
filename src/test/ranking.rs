#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{
        app::ranking::rank,
        models::{AssetClass, Quote, ScoreRecord},
    };

    fn quote(ticker: &str, asset_class: AssetClass) -> Quote {
        Quote::new(ticker.to_string(), ticker.to_lowercase(), dec!(10), asset_class)
    }

    fn score(ticker: &str, raw_score: i32, badges: &[&str]) -> ScoreRecord {
        ScoreRecord::new(
            ticker.to_string(),
            raw_score,
            badges.iter().map(|b| b.to_string()).collect(),
            Vec::new(),
        )
    }

    #[test]
    fn ranked_by_score_then_ticker() {
        let quotes = vec![
            quote("VALE3", AssetClass::Stock),
            quote("WEGE3", AssetClass::Stock),
            quote("BOVA11", AssetClass::Fund),
            quote("ABEV3", AssetClass::Stock),
        ];
        let scores = vec![
            score("WEGE3", 120, &["ISE", "ICO2"]),
            score("VALE3", 35, &["ISE", "ALERT"]),
            score("ABEV3", 50, &[]),
        ];

        let ranked = rank(&quotes, &scores, 50);
        let order: Vec<(&str, u8)> = ranked
            .iter()
            .map(|i| (i.ticker().as_str(), *i.score()))
            .collect();

        assert_eq!(
            order,
            vec![("WEGE3", 100), ("ABEV3", 50), ("BOVA11", 50), ("VALE3", 35)]
        );
        assert_eq!(ranked[0].badges(), &vec!["ISE".to_string(), "ICO2".to_string()]);
        assert!(ranked[2].badges().is_empty());
        assert_eq!(*ranked[2].asset_class(), AssetClass::Fund);
    }

    #[test]
    fn unscored_quotes_take_default_score() {
        let quotes = vec![quote("BBAS3", AssetClass::Stock)];

        let ranked = rank(&quotes, &[], 42);

        assert_eq!(*ranked[0].score(), 42);
    }
}
