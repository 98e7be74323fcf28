#[cfg(test)]
mod tests {
    use std::io::Write;

    use rust_decimal_macros::dec;
    use tempfile::NamedTempFile;

    use crate::{
        api::{load_quotes, load_ranked_instruments, load_rule_table},
        app::scoring::score_ticker,
        error::CoherenceError,
        models::AssetClass,
    };

    fn write_json(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn quotes_accept_feed_field_names() {
        let file = write_json(
            r#"[
                {"symbol": "wege3", "name": "WEG", "price": 41.2, "type": "stock"},
                {"ticker": "BOVA11", "name": "iShares Ibovespa", "price": "120.50", "assetClass": "fund"},
                {"ticker": "BROKEN"}
            ]"#,
        );

        let quotes = load_quotes(file.path().to_str().unwrap()).unwrap();

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].ticker(), "WEGE3");
        assert_eq!(*quotes[0].price(), dec!(41.2));
        assert_eq!(*quotes[1].asset_class(), AssetClass::Fund);
        assert_eq!(*quotes[1].price(), dec!(120.50));
    }

    #[test]
    fn empty_quote_snapshot_is_an_error() {
        let file = write_json("[]");

        assert!(load_quotes(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn ranked_snapshot_keeps_its_order() {
        let file = write_json(
            r#"[
                {"ticker": "ITSA4", "price": 10, "assetClass": "stock", "score": 60},
                {"ticker": "TESOURO-SELIC", "price": 100, "assetClass": "fixed_income", "score": 90, "badges": ["GOV"]}
            ]"#,
        );

        let ranked = load_ranked_instruments(file.path().to_str().unwrap()).unwrap();

        assert_eq!(ranked[0].ticker(), "ITSA4");
        assert_eq!(*ranked[1].asset_class(), AssetClass::FixedIncome);
        assert_eq!(ranked[1].badges(), &vec!["GOV".to_string()]);
    }

    #[test]
    fn rule_table_is_normalized_and_scored() {
        let file = write_json(
            r#"{
                "bonus_rules": [
                    {"code": "ISE", "weight": 35, "source": "B3 ISE", "members": ["vale3", "WEGE3"]},
                    {"code": "GPTW", "weight": 10, "source": "GPTW ranking", "members": ["WEGE3"]},
                    {"code": "IGPTW", "weight": 10, "source": "B3 IGPTW", "members": ["WEGE3"]}
                ],
                "aliases": {"GPTW": "IGPTW"},
                "penalties": {
                    "Vale3": [{"description": "Dam collapse", "value": -50, "source": "IBAMA"}]
                }
            }"#,
        );

        let rules = load_rule_table(file.path().to_str().unwrap()).unwrap();

        let vale = score_ticker("VALE3", &rules);
        assert_eq!(*vale.raw_score(), 35);

        let weg = score_ticker("WEGE3", &rules);
        assert_eq!(*weg.raw_score(), 95);
        assert_eq!(weg.badges(), &vec!["ISE".to_string(), "IGPTW".to_string()]);
    }

    #[test]
    fn rule_table_with_positive_penalty_is_rejected() {
        let file = write_json(
            r#"{"penalties": {"VALE3": [{"description": "Typo", "value": 50, "source": "x"}]}}"#,
        );

        let err = load_rule_table(file.path().to_str().unwrap()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CoherenceError>(),
            Some(CoherenceError::PositivePenalty { value: 50, .. })
        ));
    }
}
