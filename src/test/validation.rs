#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rust_decimal_macros::dec;

    use crate::{
        app::validation::{
            is_valid_ticker, normalize_ticker, validate_ledger, validate_rule_table,
            validate_transaction,
        },
        error::CoherenceError,
        models::{BonusRule, Penalty, RuleTable},
        test::{buy, sell},
    };

    #[test]
    fn well_formed_transaction_passes() {
        assert!(validate_transaction(&buy(1, "PETR4", dec!(10), dec!(38.5))).is_ok());
    }

    #[test]
    fn non_positive_quantity_is_rejected() {
        let err = validate_transaction(&buy(7, "PETR4", dec!(-1), dec!(38.5))).unwrap_err();

        assert_eq!(
            err,
            CoherenceError::NonPositiveQuantity {
                id: 7,
                ticker: "PETR4".to_string(),
                quantity: dec!(-1),
            }
        );
    }

    #[test]
    fn non_positive_price_is_rejected() {
        let err = validate_transaction(&sell(8, "PETR4", dec!(1), dec!(0))).unwrap_err();

        assert!(matches!(err, CoherenceError::NonPositivePrice { id: 8, .. }));
    }

    #[test]
    fn malformed_ticker_is_rejected() {
        let err = validate_transaction(&buy(9, "PETR 4", dec!(1), dec!(1))).unwrap_err();

        assert!(matches!(err, CoherenceError::InvalidTicker { id: 9, .. }));
        assert!(!is_valid_ticker(""));
        assert!(!is_valid_ticker("-ABC"));
        assert!(is_valid_ticker("BRK.B"));
        assert!(is_valid_ticker("CDB-BANCO"));
    }

    #[test]
    fn tickers_are_trimmed_and_upper_cased() {
        assert_eq!(normalize_ticker("  wege3 "), "WEGE3");
    }

    #[test]
    fn selling_the_full_position_is_allowed() {
        let ledger = vec![
            buy(1, "WEGE3", dec!(10), dec!(30)),
            sell(2, "WEGE3", dec!(10), dec!(35)),
        ];

        assert!(validate_ledger(&ledger).is_ok());
    }

    #[test]
    fn overselling_is_rejected_at_the_offending_transaction() {
        let ledger = vec![
            buy(1, "WEGE3", dec!(10), dec!(30)),
            sell(2, "WEGE3", dec!(4), dec!(35)),
            buy(3, "ITSA4", dec!(100), dec!(10)),
            sell(4, "WEGE3", dec!(7), dec!(36)),
        ];

        let err = validate_ledger(&ledger).unwrap_err();

        assert_eq!(
            err,
            CoherenceError::Oversell {
                id: 4,
                ticker: "WEGE3".to_string(),
                held: dec!(6),
                requested: dec!(7),
            }
        );
    }

    #[test]
    fn sell_before_buy_is_rejected() {
        let ledger = vec![
            sell(1, "WEGE3", dec!(1), dec!(35)),
            buy(2, "WEGE3", dec!(10), dec!(30)),
        ];

        assert!(matches!(
            validate_ledger(&ledger),
            Err(CoherenceError::Oversell { id: 1, .. })
        ));
    }

    #[test]
    fn rule_table_signs_are_checked() {
        let zero_weight = RuleTable::new(
            vec![BonusRule::new(
                "ISE".to_string(),
                0,
                String::new(),
                ["WEGE3".to_string()].into_iter().collect(),
            )],
            BTreeMap::new(),
            BTreeMap::new(),
        );
        assert!(matches!(
            validate_rule_table(&zero_weight),
            Err(CoherenceError::NonPositiveWeight { weight: 0, .. })
        ));

        let positive_penalty = RuleTable::new(
            Vec::new(),
            BTreeMap::new(),
            [(
                "VALE3".to_string(),
                vec![Penalty::new("Fine".to_string(), 10, "IBAMA".to_string())],
            )]
            .into_iter()
            .collect(),
        );
        assert!(matches!(
            validate_rule_table(&positive_penalty),
            Err(CoherenceError::PositivePenalty { value: 10, .. })
        ));

        assert!(validate_rule_table(&RuleTable::default()).is_ok());
    }
}
