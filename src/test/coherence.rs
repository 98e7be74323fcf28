#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rust_decimal_macros::dec;

    use crate::{
        app::coherence::aggregate,
        models::{AssetClass, Holding},
        test::holding,
    };

    fn lookup(scores: &[(&'static str, u8)]) -> impl Fn(&str) -> Option<u8> {
        let scores: HashMap<&'static str, u8> = scores.iter().copied().collect();
        move |ticker| scores.get(ticker).copied()
    }

    #[test]
    fn single_holding_keeps_its_own_score() {
        let holdings = vec![holding("WEGE3", AssetClass::Stock, dec!(1234.56))];

        assert_eq!(aggregate(&holdings, lookup(&[("WEGE3", 83)]), 50), 83);
    }

    #[test]
    fn average_is_weighted_by_value() {
        let holdings = vec![
            holding("WEGE3", AssetClass::Stock, dec!(900)),
            holding("BRKM5", AssetClass::Stock, dec!(100)),
        ];

        let score = aggregate(&holdings, lookup(&[("WEGE3", 80), ("BRKM5", 20)]), 50);

        assert_eq!(score, 74);
    }

    #[test]
    fn missing_score_uses_default() {
        let holdings = vec![
            holding("WEGE3", AssetClass::Stock, dec!(100)),
            holding("XPTO3", AssetClass::Stock, dec!(100)),
        ];

        assert_eq!(aggregate(&holdings, lookup(&[("WEGE3", 90)]), 50), 70);
        assert_eq!(aggregate(&holdings, lookup(&[("WEGE3", 90)]), 30), 60);
    }

    #[test]
    fn half_point_rounds_up() {
        let holdings = vec![
            holding("ITSA4", AssetClass::Stock, dec!(1)),
            holding("BBAS3", AssetClass::Stock, dec!(1)),
        ];

        assert_eq!(aggregate(&holdings, lookup(&[("ITSA4", 50), ("BBAS3", 51)]), 50), 51);
    }

    #[test]
    fn empty_portfolio_scores_zero() {
        let holdings: Vec<Holding> = Vec::new();

        assert_eq!(aggregate(&holdings, lookup(&[]), 50), 0);
    }

    #[test]
    fn zero_valued_portfolio_scores_zero() {
        let holdings = vec![holding("XPTO3", AssetClass::Stock, dec!(0))];

        assert_eq!(aggregate(&holdings, lookup(&[("XPTO3", 90)]), 50), 0);
    }
}
