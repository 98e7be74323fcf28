use anyhow::{Context, Result};

use crate::models::{RiskProfile, score::NEUTRAL_SCORE};

#[derive(Debug, Clone)]
pub struct Settings {
    pub transactions_csv: Option<String>,
    pub quotes_json: Option<String>,
    pub rules_json: Option<String>,
    pub risk_profile: RiskProfile,
    pub default_score: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            transactions_csv: None,
            quotes_json: None,
            rules_json: None,
            risk_profile: RiskProfile::default(),
            default_score: NEUTRAL_SCORE as u8,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let risk_profile = match std::env::var("PORTFOLIO_RISK_PROFILE") {
            Ok(value) => value
                .parse::<RiskProfile>()
                .with_context(|| format!("Invalid PORTFOLIO_RISK_PROFILE '{}'", value))?,
            Err(_) => defaults.risk_profile,
        };

        let default_score = match std::env::var("PORTFOLIO_DEFAULT_SCORE") {
            Ok(value) => value
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|score| *score <= 100)
                .with_context(|| format!("Invalid PORTFOLIO_DEFAULT_SCORE '{}'", value))?,
            Err(_) => defaults.default_score,
        };

        Ok(Self {
            transactions_csv: std::env::var("PORTFOLIO_TRANSACTIONS_CSV").ok(),
            quotes_json: std::env::var("PORTFOLIO_QUOTES_JSON").ok(),
            rules_json: std::env::var("PORTFOLIO_RULES_JSON").ok(),
            risk_profile,
            default_score,
        })
    }

    pub fn require_transactions_csv(&self) -> Result<&str> {
        self.transactions_csv
            .as_deref()
            .context("PORTFOLIO_TRANSACTIONS_CSV or --transactions is required")
    }

    pub fn require_quotes_json(&self) -> Result<&str> {
        self.quotes_json
            .as_deref()
            .context("PORTFOLIO_QUOTES_JSON or --quotes is required")
    }

    pub fn require_rules_json(&self) -> Result<&str> {
        self.rules_json
            .as_deref()
            .context("PORTFOLIO_RULES_JSON or --rules is required")
    }
}
